//! Table position resolution.

use std::fmt;

/// Named table position. Tables larger than six-handed fall back to a
/// generic numbered label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Btn,
    Sb,
    Bb,
    Utg,
    Mp,
    Co,
    /// Generic label for unsupported table sizes, rendered as `P<offset>`.
    Other(u8),
}

const TWO: [Position; 2] = [Position::Btn, Position::Bb];
const THREE: [Position; 3] = [Position::Btn, Position::Sb, Position::Bb];
const FOUR: [Position; 4] = [Position::Btn, Position::Sb, Position::Bb, Position::Utg];
const FIVE: [Position; 5] = [
    Position::Btn,
    Position::Sb,
    Position::Bb,
    Position::Utg,
    Position::Co,
];
const SIX: [Position; 6] = [
    Position::Btn,
    Position::Sb,
    Position::Bb,
    Position::Utg,
    Position::Mp,
    Position::Co,
];

/// Map a rotational offset from the dealer button to a named position,
/// given the count of seats with chips. Pure, total, never fails.
pub fn resolve(offset: usize, players: usize) -> Position {
    let table: &[Position] = match players {
        2 => &TWO,
        3 => &THREE,
        4 => &FOUR,
        5 => &FIVE,
        6 => &SIX,
        _ => return Position::Other(offset as u8),
    };
    table
        .get(offset)
        .copied()
        .unwrap_or(Position::Other(offset as u8))
}

impl Position {
    /// Range-table key for this position. Generic labels are never present
    /// in range configuration.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Position::Btn => Some("BTN"),
            Position::Sb => Some("SB"),
            Position::Bb => Some("BB"),
            Position::Utg => Some("UTG"),
            Position::Mp => Some("MP"),
            Position::Co => Some("CO"),
            Position::Other(_) => None,
        }
    }

    /// Cutoff or button.
    pub fn is_late(&self) -> bool {
        matches!(self, Position::Co | Position::Btn)
    }

    /// Either blind.
    pub fn is_blind(&self) -> bool {
        matches!(self, Position::Sb | Position::Bb)
    }

    /// Under the gun.
    pub fn is_early(&self) -> bool {
        matches!(self, Position::Utg)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Other(offset) => write!(f, "P{}", offset),
            _ => write!(f, "{}", self.key().unwrap_or("?")),
        }
    }
}
