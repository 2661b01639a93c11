//! The composed per-decision snapshot.
//!
//! [`GameState`] is built once from the raw table snapshot and consumed by
//! every policy. It is immutable for the duration of the decision; nothing
//! in it survives to the next one.

use super::context::{preflop_aggressor, PreflopContext};
use super::position::{self, Position};
use super::table::{LegalActions, Seat, TableSnapshot};
use crate::cards::{Board, HoleCards, Street};
use crate::eval::{classify, odds, EquityOracle, HandStrength, StackZone};

/// Everything a policy needs to know about the current decision point.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current street.
    pub street: Street,
    /// Hero identity.
    pub hero_uuid: String,
    /// Hero's rotational offset from the dealer button among seats with chips.
    pub position_index: usize,
    /// Named position resolved from the offset.
    pub position: Position,
    /// Hero's chip stack.
    pub stack: u32,
    /// Stack depth zone.
    pub stack_zone: StackZone,
    /// Current pot.
    pub pot: u32,
    /// Amount required to call.
    pub to_call: u32,
    /// Count of live participants, hero included.
    pub players: usize,
    /// Hero's hole cards.
    pub hole_cards: HoleCards,
    /// Community cards.
    pub board: Board,
    /// Big blind size.
    pub big_blind: u32,
    /// Break-even calling equity.
    pub pot_odds: f64,
    /// Estimated win probability from the equity oracle.
    pub equity: f64,
    /// Heuristic made-hand and draw classification.
    pub hand: HandStrength,
    /// Hero's index in the betting order.
    pub act_index: usize,
    /// True iff the hero acts last.
    pub in_position: bool,
    /// Preflop history summary; populated only preflop.
    pub preflop: Option<PreflopContext>,
    /// True iff the hero is the last live preflop raiser.
    pub is_preflop_aggressor: bool,
}

impl GameState {
    /// Compose a decision snapshot. `None` when the snapshot is malformed
    /// (zero big blind, hero seat missing, hero not live); the caller
    /// degrades to a safe action instead of crashing.
    pub fn build<O: EquityOracle + ?Sized>(
        snapshot: &TableSnapshot,
        hole_cards: HoleCards,
        hero_uuid: &str,
        legal: &LegalActions,
        oracle: &O,
        simulations: usize,
    ) -> Option<GameState> {
        if snapshot.big_blind == 0 || snapshot.seats.is_empty() {
            return None;
        }

        let street = snapshot.street();
        let hero_seat = snapshot.seats.iter().find(|s| s.uuid == hero_uuid)?;
        let stack = hero_seat.stack;
        let to_call = legal.call.unwrap_or(0);
        let players = snapshot
            .seats
            .iter()
            .filter(|s| s.is_participating())
            .count();

        let n = snapshot.seats.len();
        // Seats with chips, rotated so the dealer button comes first.
        let with_chips: Vec<&Seat> = (0..n)
            .map(|i| &snapshot.seats[(snapshot.dealer_btn + i) % n])
            .filter(|s| s.stack > 0)
            .collect();
        let position_index = with_chips.iter().position(|s| s.uuid == hero_uuid)?;
        let position = position::resolve(position_index, with_chips.len());

        // Betting order over live participants, first to act left of the
        // button. Deliberately a different filter than the position rotation.
        let order: Vec<&Seat> = (0..n)
            .map(|i| &snapshot.seats[(snapshot.dealer_btn + 1 + i) % n])
            .filter(|s| s.is_participating())
            .collect();
        let act_index = order.iter().position(|s| s.uuid == hero_uuid)?;
        let in_position = act_index + 1 == order.len();

        let stack_zone = StackZone::from_bb(stack as f64 / snapshot.big_blind as f64);
        let pot_odds = odds::pot_odds(to_call, snapshot.pot);
        let equity = oracle.estimate_win_rate(&hole_cards, &snapshot.board, players, simulations);
        let hand = classify(&hole_cards, &snapshot.board);

        let preflop = match street {
            Street::Preflop => Some(PreflopContext::build(snapshot, hero_uuid)?),
            _ => None,
        };
        let is_preflop_aggressor = preflop_aggressor(snapshot) == Some(hero_uuid);

        log::debug!(
            "state: street={} pos={} stack={}bb zone={} pot={} to_call={} players={} \
             odds={:.2} equity={:.2} made={} ip={}",
            street,
            position,
            stack / snapshot.big_blind,
            stack_zone,
            snapshot.pot,
            to_call,
            players,
            pot_odds,
            equity,
            hand.made,
            in_position,
        );

        Some(GameState {
            street,
            hero_uuid: hero_uuid.to_string(),
            position_index,
            position,
            stack,
            stack_zone,
            pot: snapshot.pot,
            to_call,
            players,
            hole_cards,
            board: snapshot.board.clone(),
            big_blind: snapshot.big_blind,
            pot_odds,
            equity,
            hand,
            act_index,
            in_position,
            preflop,
            is_preflop_aggressor,
        })
    }

    /// Stack expressed in big blinds.
    pub fn stack_bb(&self) -> f64 {
        self.stack as f64 / self.big_blind as f64
    }

    /// Pot expressed in big blinds.
    pub fn pot_bb(&self) -> f64 {
        self.pot as f64 / self.big_blind as f64
    }

    /// Stack-to-pot ratio; zero for an empty pot.
    pub fn spr(&self) -> f64 {
        if self.pot == 0 {
            return 0.0;
        }
        self.stack as f64 / self.pot as f64
    }
}
