//! Strategy layer: static range tables, the preflop state machine, board
//! texture, hand-category bucketing, and the street-specific postflop
//! policies.

pub mod category;
pub mod flop;
pub mod preflop;
pub mod ranges;
pub mod river;
pub mod texture;
pub mod turn;

pub use category::{categorize, HandCategory};
pub use preflop::{classify_situation, PreflopSituation};
pub use ranges::{tables, FacingOpenBucket, RangeTables, SqueezeBucket};
pub use texture::BoardTexture;

use crate::state::table::{Decision, LegalActions};
use crate::state::GameState;

/// Bet a fraction of the pot, clamped into the legal raise window. Degrades
/// to checking or calling when raising is unavailable, exactly like the
/// preflop sizing helper.
pub(crate) fn bet_fraction(state: &GameState, legal: &LegalActions, fraction: f64) -> Decision {
    let target = (state.pot as f64 * fraction).round() as u32;
    match legal.clamp_raise(target) {
        Some(amount) => Decision::Raise(amount),
        None => check_or_call(legal),
    }
}

/// Check when possible, otherwise call; folds only on a malformed action set.
pub(crate) fn check_or_call(legal: &LegalActions) -> Decision {
    legal.call_or_fold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{legal, legal_no_raise, state_with};

    #[test]
    fn test_bet_fraction_clamps() {
        let state = state_with("AhKd", "Ah7c2s"); // pot 100
        assert_eq!(bet_fraction(&state, &legal(0, 20, 900), 0.66), Decision::Raise(66));
        assert_eq!(bet_fraction(&state, &legal(0, 80, 900), 0.66), Decision::Raise(80));
        assert_eq!(bet_fraction(&state, &legal(0, 20, 50), 1.0), Decision::Raise(50));
    }

    #[test]
    fn test_bet_fraction_degrades_without_raise() {
        let state = state_with("AhKd", "Ah7c2s");
        assert_eq!(bet_fraction(&state, &legal_no_raise(0), 0.66), Decision::Call(0));
        assert_eq!(bet_fraction(&state, &legal_no_raise(30), 0.66), Decision::Call(30));
    }
}
