//! Board texture analysis.
//!
//! Structure flags plus an additive wetness score computed from the board
//! alone. There is no meaningful texture before the flop, so analysis of a
//! short board yields `None`.

use crate::cards::{Board, RANK_9, RANK_A, RANK_K, RANK_Q};

/// Structural summary of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardTexture {
    /// At least two board cards share a rank.
    pub paired: bool,
    /// Three or more board cards share a suit.
    pub monotone: bool,
    /// Exactly two board cards share a suit.
    pub two_tone: bool,
    /// No gap between sorted neighboring ranks exceeds two.
    pub connected: bool,
    /// Two or more broadway cards (A, K, Q).
    pub high_card_heavy: bool,
    /// Highest card is a nine or below.
    pub low_board: bool,
    /// Additive wetness score.
    pub wet_score: u8,
    /// Score at most 2.
    pub dry: bool,
    /// Score at least 4.
    pub wet: bool,
}

impl BoardTexture {
    /// Analyze a board of at least three cards; `None` otherwise.
    pub fn analyze(board: &Board) -> Option<BoardTexture> {
        if board.len() < 3 {
            return None;
        }

        let ranks: Vec<u8> = board.cards().iter().map(|c| c.rank()).collect();
        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        for card in board.cards() {
            rank_counts[card.rank() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
        }

        let paired = rank_counts.iter().any(|&c| c >= 2);
        let monotone = suit_counts.iter().any(|&c| c >= 3);
        let two_tone = suit_counts.iter().any(|&c| c == 2);

        let mut values = ranks.clone();
        values.sort_unstable();

        let connected = is_connected(&values);
        let high_card_heavy = ranks
            .iter()
            .filter(|&&r| r == RANK_A || r == RANK_K || r == RANK_Q)
            .count()
            >= 2;
        let low_board = *values.last().unwrap_or(&0) <= RANK_9;

        let mut wet_score = 0u8;
        if connected {
            wet_score += 2;
        }
        if two_tone {
            wet_score += 2;
        }
        if monotone {
            wet_score += 3;
        }
        if !paired && connected {
            wet_score += 1;
        }
        if values.last().unwrap_or(&0) - values.first().unwrap_or(&0) <= 4 {
            wet_score += 1;
        }

        Some(BoardTexture {
            paired,
            monotone,
            two_tone,
            connected,
            high_card_heavy,
            low_board,
            wet_score,
            dry: wet_score <= 2,
            wet: wet_score >= 4,
        })
    }
}

/// Largest gap between sorted neighboring rank values is at most two.
/// Duplicate ranks stay in the list and contribute zero-width gaps.
fn is_connected(values: &[u8]) -> bool {
    if values.len() < 3 {
        return false;
    }
    values.windows(2).all(|w| w[1] - w[0] <= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture(s: &str) -> BoardTexture {
        BoardTexture::analyze(&s.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_no_texture_preflop() {
        assert!(BoardTexture::analyze(&Board::default()).is_none());
    }

    #[test]
    fn test_monotone_broadway_is_very_wet() {
        let t = texture("AhKhQh");
        assert!(t.monotone);
        assert!(!t.two_tone);
        assert!(t.connected);
        assert!(t.high_card_heavy);
        assert!(!t.paired);
        assert!(!t.low_board);
        // connected +2, monotone +3, unpaired-connected +1, span +1.
        assert_eq!(t.wet_score, 7);
        assert!(t.wet);
        assert!(!t.dry);
    }

    #[test]
    fn test_rainbow_spread_board_is_dry() {
        let t = texture("2c7dKh");
        assert!(!t.connected);
        assert!(!t.two_tone);
        assert!(!t.monotone);
        assert_eq!(t.wet_score, 0);
        assert!(t.dry);
    }

    #[test]
    fn test_paired_board_breaks_connectivity_bonus() {
        let t = texture("KsKd2h");
        assert!(t.paired);
        // Gap from 2 to K is enormous: not connected.
        assert!(!t.connected);
        assert!(t.dry);
    }

    #[test]
    fn test_two_tone_connected_low() {
        let t = texture("6s7s8d");
        assert!(t.two_tone);
        assert!(t.connected);
        assert!(t.low_board);
        // connected +2, two-tone +2, unpaired-connected +1, span +1.
        assert_eq!(t.wet_score, 6);
        assert!(t.wet);
    }

    #[test]
    fn test_turn_card_changes_texture() {
        let flop = texture("2c7dKh");
        assert!(flop.dry);
        let turn = texture("2c7dKhKd");
        assert!(turn.paired);
        assert!(turn.two_tone);
        assert!(!turn.wet);
    }
}
