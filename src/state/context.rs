//! Preflop action history analysis.
//!
//! Walks the preflop log to summarize what happened before the hero's turn:
//! raise/caller/limper counts, the last raiser still in the hand, and how
//! many players are left to act. The wrap-around arithmetic here feeds every
//! downstream situational classification, so it is covered tightly by tests.

use super::table::{ActionKind, Seat, TableSnapshot};
use rustc_hash::FxHashSet;

/// Street-scoped preflop summary, recomputed fresh for each decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflopContext {
    /// Raises seen before the hero's turn, hero's own excluded.
    pub raises_before: u32,
    /// Calls of a raise seen before the hero's turn.
    pub callers_before: u32,
    /// Calls at the big-blind price (limps) seen before the hero's turn.
    pub limpers_before: u32,
    /// Players still to act behind the hero.
    pub players_left_to_act: usize,
    /// True iff the hero's action closes the betting round.
    pub is_closing_action: bool,
    /// The most recent raiser who is still a live participant, hero
    /// excluded. A raiser who has since folded does not count.
    pub last_raiser: Option<String>,
}

/// Seats in betting order: first to act sits left of the button, live
/// participants only.
fn betting_order(snapshot: &TableSnapshot) -> Vec<&Seat> {
    let n = snapshot.seats.len();
    (0..n)
        .map(|i| &snapshot.seats[(snapshot.dealer_btn + 1 + i) % n])
        .filter(|s| s.is_participating())
        .collect()
}

impl PreflopContext {
    /// Analyze the preflop log for the given hero. `None` when the hero is
    /// not among the live participants.
    pub fn build(snapshot: &TableSnapshot, hero_uuid: &str) -> Option<Self> {
        let order = betting_order(snapshot);
        let alive: FxHashSet<&str> = order.iter().map(|s| s.uuid.as_str()).collect();
        let hero_pos = order.iter().position(|s| s.uuid == hero_uuid)?;

        let bb = snapshot.big_blind;
        let mut raises = 0u32;
        let mut callers = 0u32;
        let mut limpers = 0u32;
        let mut max_bet = bb;
        let mut last_raiser: Option<&str> = None;

        for action in &snapshot.actions.preflop {
            if action.uuid == hero_uuid {
                continue;
            }
            match action.kind {
                ActionKind::Raise => {
                    raises += 1;
                    max_bet = max_bet.max(action.amount);
                    // Only a raiser who has not since folded counts.
                    if alive.contains(action.uuid.as_str()) {
                        last_raiser = Some(&action.uuid);
                    }
                }
                ActionKind::Call => {
                    if max_bet == bb {
                        limpers += 1;
                    } else {
                        callers += 1;
                    }
                }
                ActionKind::Fold => {}
            }
        }

        let players_left = match last_raiser {
            // Nobody raised, or every raiser folded: everyone behind the
            // hero still acts.
            None => order.len() - hero_pos - 1,
            Some(raiser) => {
                let raiser_pos = order.iter().position(|s| s.uuid == raiser)?;
                if hero_pos < raiser_pos {
                    raiser_pos - hero_pos - 1
                } else {
                    // Wrap past the end of the order back to the raiser.
                    order.len() - hero_pos - 1 + raiser_pos
                }
            }
        };

        Some(PreflopContext {
            raises_before: raises,
            callers_before: callers,
            limpers_before: limpers,
            players_left_to_act: players_left,
            is_closing_action: players_left == 0,
            last_raiser: last_raiser.map(str::to_owned),
        })
    }
}

/// The preflop aggressor: the last preflop raiser who is still a live
/// participant, the hero included. Used by the postflop engines on every
/// street.
pub fn preflop_aggressor(snapshot: &TableSnapshot) -> Option<&str> {
    let alive: FxHashSet<&str> = snapshot
        .seats
        .iter()
        .filter(|s| s.is_participating())
        .map(|s| s.uuid.as_str())
        .collect();
    let mut last = None;
    for action in &snapshot.actions.preflop {
        if action.kind == ActionKind::Raise && alive.contains(action.uuid.as_str()) {
            last = Some(action.uuid.as_str());
        }
    }
    last
}
