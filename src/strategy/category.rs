//! Hand category bucketing.
//!
//! Maps a [`GameState`] to one of seven qualitative buckets via a strict
//! priority ladder over the made hand, the draws, and the estimated equity.
//! The first matching rule wins, so the assignment is deterministic for
//! identical inputs.

use crate::cards::Board;
use crate::eval::MadeHand;
use crate::state::GameState;
use std::fmt;

/// Qualitative hand quality at the current street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    Nuts,
    StrongMade,
    MediumMade,
    WeakMade,
    StrongDraw,
    WeakDraw,
    Air,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::Nuts => "nuts",
            HandCategory::StrongMade => "strong_made",
            HandCategory::MediumMade => "medium_made",
            HandCategory::WeakMade => "weak_made",
            HandCategory::StrongDraw => "strong_draw",
            HandCategory::WeakDraw => "weak_draw",
            HandCategory::Air => "air",
        };
        write!(f, "{}", name)
    }
}

/// Bucket the hero's hand. Equity is scaled up in multiway pots before the
/// ladder is applied.
pub fn categorize(state: &GameState) -> HandCategory {
    let made = state.hand.made;
    let draws = state.hand.draws;

    let mut equity = state.equity;
    if state.players > 2 {
        equity *= 1.0 + (state.players as f64 - 2.0) * 0.08;
    }

    let category = if matches!(made, MadeHand::Quads | MadeHand::FullHouse) {
        HandCategory::Nuts
    } else if made == MadeHand::Flush && !board_is_paired(&state.board) {
        HandCategory::Nuts
    } else if equity >= 0.85 {
        HandCategory::Nuts
    } else if matches!(made, MadeHand::Straight | MadeHand::Trips) && equity >= 0.65 {
        HandCategory::StrongMade
    } else if made == MadeHand::TwoPair && equity >= 0.60 {
        HandCategory::StrongMade
    } else if made == MadeHand::Pair && equity >= 0.65 {
        HandCategory::StrongMade
    } else if matches!(made, MadeHand::TwoPair | MadeHand::Pair) && equity >= 0.45 {
        HandCategory::MediumMade
    } else if matches!(made, MadeHand::Pair | MadeHand::HighCard) && equity >= 0.30 {
        HandCategory::WeakMade
    } else if draws.flush_draw && draws.straight_draw {
        HandCategory::StrongDraw
    } else if draws.flush_draw && equity >= 0.35 {
        HandCategory::StrongDraw
    } else if draws.straight_draw && equity >= 0.33 {
        HandCategory::StrongDraw
    } else if draws.any() {
        HandCategory::WeakDraw
    } else {
        HandCategory::Air
    };

    log::debug!(
        "category: made={} equity={:.2} ({} players) -> {}",
        made,
        equity,
        state.players,
        category
    );
    category
}

/// At least two board cards share a rank.
fn board_is_paired(board: &Board) -> bool {
    let mut counts = [0u8; 13];
    for card in board.cards() {
        counts[card.rank() as usize] += 1;
        if counts[card.rank() as usize] >= 2 {
            return true;
        }
    }
    false
}
