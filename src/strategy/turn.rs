//! Turn policy.
//!
//! The aggressor barrels made hands and semi-bluffs strong draws; air only
//! fires on a scare card, and then only part of the time. The defender
//! continues narrowly against a bet and stabs small when checked to.

use super::category::{categorize, HandCategory};
use super::{bet_fraction, check_or_call};
use crate::cards::{Board, RANK_A, RANK_K};
use crate::state::table::{Decision, LegalActions};
use crate::state::GameState;
use rand::Rng;

/// Select the turn action.
pub fn decide<R: Rng>(state: &GameState, legal: &LegalActions, rng: &mut R) -> Decision {
    let category = categorize(state);
    let aggressor = state.is_preflop_aggressor;
    let scare = is_scare_card(&state.board);
    let high_spr = state.spr() >= 6.0;

    log::debug!(
        "turn: category={} aggressor={} scare={} spr={:.1}",
        category,
        aggressor,
        scare,
        state.spr()
    );

    if aggressor {
        return match category {
            HandCategory::Nuts => bet_fraction(state, legal, 0.75),
            HandCategory::StrongMade if high_spr => bet_fraction(state, legal, 0.5),
            HandCategory::StrongMade => bet_fraction(state, legal, 0.75),
            HandCategory::StrongDraw if state.equity > 0.30 => bet_fraction(state, legal, 0.5),
            HandCategory::Air if scare && rng.gen::<f64>() < 0.40 => {
                log::debug!("turn: bluffing the scare card");
                bet_fraction(state, legal, 0.5)
            }
            _ => check_or_call(legal),
        };
    }

    if state.to_call > 0 {
        return match category {
            HandCategory::Nuts => bet_fraction(state, legal, 0.75),
            HandCategory::StrongMade | HandCategory::StrongDraw
                if state.equity > state.pot_odds =>
            {
                legal.call_or_fold()
            }
            _ => Decision::Fold,
        };
    }

    match category {
        HandCategory::Nuts | HandCategory::StrongMade => bet_fraction(state, legal, 0.5),
        HandCategory::StrongDraw if state.equity > 0.30 => bet_fraction(state, legal, 0.5),
        _ => check_or_call(legal),
    }
}

/// Whether the turn card changes the board enough to credibly bluff at:
/// a new ace or king, a third card of one suit, or a fourth distinct rank.
fn is_scare_card(board: &Board) -> bool {
    if board.len() < 4 {
        return false;
    }
    let cards = board.cards();
    let turn = cards[cards.len() - 1];
    let earlier = &cards[..cards.len() - 1];

    if turn.rank() == RANK_A || turn.rank() == RANK_K {
        return true;
    }
    if earlier.iter().filter(|c| c.suit() == turn.suit()).count() >= 2 {
        return true;
    }
    let mut ranks: Vec<u8> = earlier.iter().map(|c| c.rank()).collect();
    ranks.push(turn.rank());
    ranks.sort_unstable();
    ranks.dedup();
    ranks.len() >= 4
}
