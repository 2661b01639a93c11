//! Orchestration-facing table types.
//!
//! The surrounding game engine hands the core a raw snapshot of the table
//! plus the set of currently legal actions; the core hands back exactly one
//! [`Decision`]. Nothing here is persisted between decisions.

use crate::cards::{Board, Street};
use std::fmt;

/// Participation status of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatState {
    /// Still live in the current hand.
    Participating,
    /// Folded this hand.
    Folded,
    /// All-in, no further actions.
    AllIn,
    /// Sitting out.
    Out,
}

/// One seat at the table.
#[derive(Debug, Clone)]
pub struct Seat {
    /// Player identity assigned by the orchestration.
    pub uuid: String,
    /// Current chip stack.
    pub stack: u32,
    /// Participation status.
    pub state: SeatState,
}

impl Seat {
    /// True if the seat is still live in the current hand.
    pub fn is_participating(&self) -> bool {
        self.state == SeatState::Participating
    }
}

/// Kind of a logged betting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Fold,
    Call,
    Raise,
}

/// One chronological entry in a street's action log.
#[derive(Debug, Clone)]
pub struct ActionRecord {
    /// Actor identity.
    pub uuid: String,
    /// What the actor did.
    pub kind: ActionKind,
    /// Total amount of the call or raise; zero for folds.
    pub amount: u32,
}

/// Append-only action histories, one list per street.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    pub preflop: Vec<ActionRecord>,
    pub flop: Vec<ActionRecord>,
    pub turn: Vec<ActionRecord>,
    pub river: Vec<ActionRecord>,
}

impl ActionLog {
    /// The log for one street.
    pub fn for_street(&self, street: Street) -> &[ActionRecord] {
        match street {
            Street::Preflop => &self.preflop,
            Street::Flop => &self.flop,
            Street::Turn => &self.turn,
            Street::River => &self.river,
        }
    }
}

/// Raw table snapshot received per decision. The street is implied by the
/// board length.
#[derive(Debug, Clone)]
pub struct TableSnapshot {
    /// Community cards.
    pub board: Board,
    /// Current pot size.
    pub pot: u32,
    /// All seats in table order.
    pub seats: Vec<Seat>,
    /// Index of the dealer button into `seats`.
    pub dealer_btn: usize,
    /// Big blind size.
    pub big_blind: u32,
    /// Per-street action histories.
    pub actions: ActionLog,
}

impl TableSnapshot {
    /// The street implied by the board.
    pub fn street(&self) -> Street {
        self.board.street()
    }
}

/// Legal raise window. The orchestration signals "raise unavailable" with
/// negative sentinels, which [`RaiseBounds::window`] filters out.
#[derive(Debug, Clone, Copy)]
pub struct RaiseBounds {
    /// Minimum legal raise-to amount, or a negative sentinel.
    pub min: i64,
    /// Maximum legal raise-to amount, or a negative sentinel.
    pub max: i64,
}

impl RaiseBounds {
    /// The validated inclusive window, or `None` for sentinels or an
    /// inverted range.
    pub fn window(&self) -> Option<(u32, u32)> {
        if self.min < 0 || self.max < self.min {
            return None;
        }
        Some((self.min as u32, self.max as u32))
    }
}

/// The enumerated set of currently legal actions.
#[derive(Debug, Clone, Copy)]
pub struct LegalActions {
    /// Whether folding is offered.
    pub can_fold: bool,
    /// Amount required to call (zero means a free check), or `None` when the
    /// call entry is missing from a malformed action set.
    pub call: Option<u32>,
    /// Raise bounds, or `None` when raising is not offered at all.
    pub raise: Option<RaiseBounds>,
}

impl LegalActions {
    /// Clamp a raise target into the legal window. `None` when raising is
    /// unavailable or the bounds are invalid.
    pub fn clamp_raise(&self, target: u32) -> Option<u32> {
        let (min, max) = self.raise?.window()?;
        Some(target.clamp(min, max))
    }

    /// The maximum legal raise amount, if raising is possible.
    pub fn max_raise(&self) -> Option<u32> {
        self.raise?.window().map(|(_, max)| max)
    }

    /// Call if a call entry exists, otherwise fold. The terminal fallback
    /// for every policy branch that wants to continue.
    pub fn call_or_fold(&self) -> Decision {
        match self.call {
            Some(amount) => Decision::Call(amount),
            None => {
                log::debug!("call entry missing from legal actions, folding");
                Decision::Fold
            }
        }
    }

    /// Check when free, otherwise fold, otherwise forced call.
    pub fn fold_or_check(&self) -> Decision {
        if self.call == Some(0) {
            return Decision::Call(0);
        }
        if self.can_fold {
            return Decision::Fold;
        }
        log::debug!("no fold option, forced call");
        self.call_or_fold()
    }
}

/// The single action handed back to the orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Fold the hand.
    Fold,
    /// Call for the given amount (zero is a check).
    Call(u32),
    /// Raise to the given amount, always inside the legal window.
    Raise(u32),
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Fold => write!(f, "fold"),
            Decision::Call(0) => write!(f, "check"),
            Decision::Call(amount) => write!(f, "call {}", amount),
            Decision::Raise(amount) => write!(f, "raise {}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_window_sentinels() {
        assert_eq!(RaiseBounds { min: -1, max: -1 }.window(), None);
        assert_eq!(RaiseBounds { min: 40, max: 20 }.window(), None);
        assert_eq!(RaiseBounds { min: 40, max: 900 }.window(), Some((40, 900)));
    }

    #[test]
    fn test_clamp_raise() {
        let legal = LegalActions {
            can_fold: true,
            call: Some(20),
            raise: Some(RaiseBounds { min: 40, max: 900 }),
        };
        assert_eq!(legal.clamp_raise(10), Some(40));
        assert_eq!(legal.clamp_raise(44), Some(44));
        assert_eq!(legal.clamp_raise(5000), Some(900));

        let no_raise = LegalActions {
            can_fold: true,
            call: Some(20),
            raise: Some(RaiseBounds { min: -1, max: -1 }),
        };
        assert_eq!(no_raise.clamp_raise(44), None);
    }

    #[test]
    fn test_degradation_ladder() {
        // Free check is preferred over folding.
        let free = LegalActions {
            can_fold: true,
            call: Some(0),
            raise: None,
        };
        assert_eq!(free.fold_or_check(), Decision::Call(0));

        // Facing a bet, fold wins.
        let facing = LegalActions {
            can_fold: true,
            call: Some(60),
            raise: None,
        };
        assert_eq!(facing.fold_or_check(), Decision::Fold);

        // No fold offered: forced call.
        let forced = LegalActions {
            can_fold: false,
            call: Some(60),
            raise: None,
        };
        assert_eq!(forced.fold_or_check(), Decision::Call(60));

        // Malformed set with no call entry degrades to fold, never panics.
        let broken = LegalActions {
            can_fold: false,
            call: None,
            raise: None,
        };
        assert_eq!(broken.fold_or_check(), Decision::Fold);
        assert_eq!(broken.call_or_fold(), Decision::Fold);
    }
}
