//! River policy.
//!
//! No more cards to come: made hands are all that matter. Facing a bet the
//! engine calls strong value and bluff-catches medium hands on price;
//! checked to, it value-bets big, takes thin value in position half the
//! time, and bluffs small only with the betting lead, position, and a wet
//! board.

use super::category::{categorize, HandCategory};
use super::texture::BoardTexture;
use super::{bet_fraction, check_or_call};
use crate::state::table::{Decision, LegalActions};
use crate::state::GameState;
use rand::Rng;

/// Select the river action.
pub fn decide<R: Rng>(state: &GameState, legal: &LegalActions, rng: &mut R) -> Decision {
    let category = categorize(state);
    let aggressor = state.is_preflop_aggressor;
    let wet = BoardTexture::analyze(&state.board).map_or(false, |t| t.wet);

    log::debug!(
        "river: category={} aggressor={} wet={} odds={:.2}",
        category,
        aggressor,
        wet,
        state.pot_odds
    );

    if state.to_call > 0 {
        return match category {
            HandCategory::Nuts | HandCategory::StrongMade => legal.call_or_fold(),
            HandCategory::MediumMade if state.equity > state.pot_odds => legal.call_or_fold(),
            _ => Decision::Fold,
        };
    }

    match category {
        HandCategory::Nuts | HandCategory::StrongMade => bet_fraction(state, legal, 0.8),
        HandCategory::MediumMade if state.in_position && rng.gen::<f64>() < 0.5 => {
            log::debug!("river: thin value in position");
            bet_fraction(state, legal, 0.5)
        }
        HandCategory::Air
            if aggressor && state.in_position && wet && rng.gen::<f64>() < 0.30 =>
        {
            log::debug!("river: bluffing the missed range");
            bet_fraction(state, legal, 0.5)
        }
        _ => check_or_call(legal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{legal, state_with};
    use rand::rngs::mock::StepRng;

    fn always() -> StepRng {
        StepRng::new(0, 0)
    }

    fn never() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    /// Wet runout: three hearts plus two clubs.
    const WET_BOARD: &str = "Ah7c2cQh9h";

    #[test]
    fn test_facing_bet_call_ladder() {
        // Strong value calls.
        let mut state = state_with("AsAd", WET_BOARD);
        state.pot = 100;
        state.to_call = 60;
        state.pot_odds = 60.0 / 160.0;
        state.equity = 0.70;
        assert_eq!(decide(&state, &legal(60, 120, 400), &mut never()), Decision::Call(60));

        // Medium made (two pair here) bluff-catches on price only.
        let mut state = state_with("AsQd", WET_BOARD);
        state.pot = 100;
        state.to_call = 60;
        state.pot_odds = 60.0 / 160.0;
        state.equity = 0.50;
        assert_eq!(decide(&state, &legal(60, 120, 400), &mut never()), Decision::Call(60));
        state.pot_odds = 0.55;
        assert_eq!(decide(&state, &legal(60, 120, 400), &mut never()), Decision::Fold);

        // Everything else folds.
        let mut state = state_with("Jc3d", WET_BOARD);
        state.pot = 100;
        state.to_call = 60;
        state.pot_odds = 60.0 / 160.0;
        state.equity = 0.10;
        assert_eq!(decide(&state, &legal(60, 120, 400), &mut always()), Decision::Fold);
    }

    #[test]
    fn test_checked_to_value_bets() {
        let mut state = state_with("AsAd", WET_BOARD);
        state.pot = 100;
        state.equity = 0.70;
        assert_eq!(decide(&state, &legal(0, 20, 400), &mut never()), Decision::Raise(80));
    }

    #[test]
    fn test_thin_value_is_mixed_and_position_gated() {
        let mut state = state_with("AsQd", WET_BOARD);
        state.pot = 100;
        state.equity = 0.50; // two pair at middling equity: medium made
        state.in_position = true;
        assert_eq!(decide(&state, &legal(0, 20, 400), &mut always()), Decision::Raise(50));
        assert_eq!(decide(&state, &legal(0, 20, 400), &mut never()), Decision::Call(0));

        state.in_position = false;
        assert_eq!(decide(&state, &legal(0, 20, 400), &mut always()), Decision::Call(0));
    }

    #[test]
    fn test_bluff_requires_lead_position_and_wet_board() {
        let mut state = state_with("Jc3d", WET_BOARD);
        state.pot = 100;
        state.equity = 0.10; // air
        state.is_preflop_aggressor = true;
        state.in_position = true;
        assert_eq!(decide(&state, &legal(0, 20, 400), &mut always()), Decision::Raise(50));
        // The 30% frequency stays honest.
        assert_eq!(decide(&state, &legal(0, 20, 400), &mut never()), Decision::Call(0));

        // Without the lead there is no story to tell.
        state.is_preflop_aggressor = false;
        assert_eq!(decide(&state, &legal(0, 20, 400), &mut always()), Decision::Call(0));

        // Dry boards get no bluffs either.
        let mut state = state_with("Jc3d", "Ah7c2sQh9d");
        state.pot = 100;
        state.equity = 0.10;
        state.is_preflop_aggressor = true;
        state.in_position = true;
        assert_eq!(decide(&state, &legal(0, 20, 400), &mut always()), Decision::Call(0));
    }
}
