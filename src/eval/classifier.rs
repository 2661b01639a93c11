//! Heuristic made-hand and draw detection.
//!
//! This is the classifier the policies consume. It works on rank/suit
//! multiset counts and is intentionally coarse: the straight-draw test is a
//! four-card-window over-approximation, not exact outs counting, and the
//! downstream category thresholds are tuned against exactly this behavior.

use crate::cards::{Board, Card, HoleCards, RANK_2, RANK_3, RANK_4, RANK_5, RANK_A};
use std::fmt;

/// Best made hand detectable from the multiset counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MadeHand {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
}

impl fmt::Display for MadeHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MadeHand::HighCard => "high_card",
            MadeHand::Pair => "pair",
            MadeHand::TwoPair => "two_pair",
            MadeHand::Trips => "trips",
            MadeHand::Straight => "straight",
            MadeHand::Flush => "flush",
            MadeHand::FullHouse => "full_house",
            MadeHand::Quads => "quads",
        };
        write!(f, "{}", name)
    }
}

/// Draw flags, computed independently of the made hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Draws {
    /// Exactly four cards of one suit among all cards.
    pub flush_draw: bool,
    /// Any four distinct rank values spanning at most four positions.
    pub straight_draw: bool,
}

impl Draws {
    /// True if either draw flag is set.
    pub fn any(&self) -> bool {
        self.flush_draw || self.straight_draw
    }
}

/// Made hand plus draws for the hero's hand at the current street.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandStrength {
    /// Best made hand.
    pub made: MadeHand,
    /// Independent draw flags.
    pub draws: Draws,
}

/// Classify hero + board cards (2-7 total).
///
/// Draws are suppressed entirely on a complete board.
pub fn classify(hole: &HoleCards, board: &Board) -> HandStrength {
    let mut cards: Vec<Card> = hole.cards().to_vec();
    cards.extend_from_slice(board.cards());

    let mut rank_counts = [0u8; 13];
    let mut suit_counts = [0u8; 4];
    for card in &cards {
        rank_counts[card.rank() as usize] += 1;
        suit_counts[card.suit() as usize] += 1;
    }

    let mut counts: Vec<u8> = rank_counts.iter().copied().filter(|&c| c > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let top = counts.first().copied().unwrap_or(0);
    let second = counts.get(1).copied().unwrap_or(0);

    let values = distinct_sorted(&rank_counts);

    let made = if top == 4 {
        MadeHand::Quads
    } else if top == 3 && second >= 2 {
        MadeHand::FullHouse
    } else if suit_counts.iter().any(|&c| c == 5) {
        MadeHand::Flush
    } else if has_straight(&values) {
        MadeHand::Straight
    } else if top == 3 {
        MadeHand::Trips
    } else if top == 2 && second == 2 {
        MadeHand::TwoPair
    } else if top == 2 {
        MadeHand::Pair
    } else {
        MadeHand::HighCard
    };

    let draws = if board.len() == 5 {
        // No draws possible on the river.
        Draws::default()
    } else {
        Draws {
            flush_draw: suit_counts.iter().any(|&c| c == 4),
            straight_draw: has_straight_draw(&values),
        }
    };

    HandStrength { made, draws }
}

/// Distinct rank values present, ascending.
fn distinct_sorted(rank_counts: &[u8; 13]) -> Vec<u8> {
    (0..13u8).filter(|&r| rank_counts[r as usize] > 0).collect()
}

/// Five distinct ranks in a row, wheel included.
fn has_straight(values: &[u8]) -> bool {
    if wheel_count(values) == 5 {
        return true;
    }
    values.windows(5).any(|w| w[4] - w[0] == 4)
}

/// Four-card-window straight-draw heuristic: any four distinct rank values
/// spanning at most four positions, with the wheel ranks counted as well.
fn has_straight_draw(values: &[u8]) -> bool {
    if wheel_count(values) >= 4 {
        return true;
    }
    values.windows(4).any(|w| w[3] - w[0] <= 4)
}

/// How many of the wheel ranks (A, 2, 3, 4, 5) are present.
fn wheel_count(values: &[u8]) -> usize {
    [RANK_A, RANK_2, RANK_3, RANK_4, RANK_5]
        .iter()
        .filter(|r| values.contains(r))
        .count()
}
