//! Card primitives.
//!
//! Fundamental card types shared by the whole decision pipeline:
//! - `Card`: a single playing card with rank and suit
//! - `HoleCards`: the hero's two private cards, with a canonical hand code
//! - `Board`: community cards (0-5 cards); the board length determines the street
//! - `Deck`: a 52-card deck minus dead cards, used by the equity oracle

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Rank of a card (0-12: 2-A).
pub const RANK_2: u8 = 0;
pub const RANK_3: u8 = 1;
pub const RANK_4: u8 = 2;
pub const RANK_5: u8 = 3;
pub const RANK_6: u8 = 4;
pub const RANK_7: u8 = 5;
pub const RANK_8: u8 = 6;
pub const RANK_9: u8 = 7;
pub const RANK_T: u8 = 8;
pub const RANK_J: u8 = 9;
pub const RANK_Q: u8 = 10;
pub const RANK_K: u8 = 11;
pub const RANK_A: u8 = 12;

/// Rank characters for display.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters for display.
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Error produced when parsing cards, hole cards, or boards from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    /// Input length does not match the expected card count.
    BadLength(usize),
    /// Unknown rank character.
    BadRank(char),
    /// Unknown suit character.
    BadSuit(char),
}

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(n) => write!(f, "unexpected input length: {}", n),
            Self::BadRank(c) => write!(f, "invalid rank character: {}", c),
            Self::BadSuit(c) => write!(f, "invalid suit character: {}", c),
        }
    }
}

impl std::error::Error for ParseCardError {}

/// A single playing card, packed as `rank * 4 + suit`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    id: u8,
}

impl Card {
    /// Create a new card from rank (0-12) and suit (0-3).
    #[inline]
    pub fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < 13, "rank must be 0-12");
        debug_assert!(suit < 4, "suit must be 0-3");
        Self { id: rank * 4 + suit }
    }

    /// Create a card from its packed id (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!(id < 52, "card id must be 0-51");
        Self { id }
    }

    /// Get the card's packed id (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank (0-12: 2-A).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4
    }

    /// Get the card's suit (0-3).
    #[inline]
    pub fn suit(&self) -> u8 {
        self.id % 4
    }

    /// Get the rank character for display ('2'-'9', 'T', 'J', 'Q', 'K', 'A').
    pub fn rank_char(&self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    /// Get the suit character for display ('c', 'd', 'h', 's').
    pub fn suit_char(&self) -> char {
        SUIT_CHARS[self.suit() as usize]
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse a card from text like "As", "Kh", "2c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(ParseCardError::BadLength(chars.len()));
        }
        let rank = RANK_CHARS
            .iter()
            .position(|&c| c == chars[0].to_ascii_uppercase())
            .ok_or(ParseCardError::BadRank(chars[0]))?;
        let suit = SUIT_CHARS
            .iter()
            .position(|&c| c == chars[1].to_ascii_lowercase())
            .ok_or(ParseCardError::BadSuit(chars[1]))?;
        Ok(Self::new(rank as u8, suit as u8))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// The hero's two hole cards, ordered higher rank first.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards {
    /// First card (higher rank by convention).
    pub card1: Card,
    /// Second card.
    pub card2: Card,
}

impl HoleCards {
    /// Create hole cards, ordering by rank (higher first).
    pub fn new(card1: Card, card2: Card) -> Self {
        if card1.rank() >= card2.rank() {
            Self { card1, card2 }
        } else {
            Self {
                card1: card2,
                card2: card1,
            }
        }
    }

    /// Check if the two cards share a suit.
    pub fn is_suited(&self) -> bool {
        self.card1.suit() == self.card2.suit()
    }

    /// Check if the two cards share a rank.
    pub fn is_pair(&self) -> bool {
        self.card1.rank() == self.card2.rank()
    }

    /// Canonical hand code used as the key into every range table.
    ///
    /// Pairs collapse to `"RR"`; everything else is high rank, low rank,
    /// then `s` for suited or `o` for offsuit: `"AKo"`, `"98s"`, `"77"`.
    /// The code is invariant under suit permutation.
    pub fn code(&self) -> String {
        let hi = self.card1.rank_char();
        let lo = self.card2.rank_char();
        if self.is_pair() {
            format!("{}{}", hi, lo)
        } else if self.is_suited() {
            format!("{}{}s", hi, lo)
        } else {
            format!("{}{}o", hi, lo)
        }
    }

    /// Get both cards as an array.
    pub fn cards(&self) -> [Card; 2] {
        [self.card1, self.card2]
    }
}

impl FromStr for HoleCards {
    type Err = ParseCardError;

    /// Parse hole cards from text like "AhKs" or "Ah Ks".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace(' ', "");
        if s.len() != 4 {
            return Err(ParseCardError::BadLength(s.len()));
        }
        let c1 = s[0..2].parse()?;
        let c2 = s[2..4].parse()?;
        Ok(Self::new(c1, c2))
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.card1, self.card2)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Community cards.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Create an empty (preflop) board.
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(5),
        }
    }

    /// Create a board from cards.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        debug_assert!(cards.len() <= 5);
        Self { cards }
    }

    /// Get the number of cards on the board.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the cards on the board.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Add a card to the board.
    pub fn add(&mut self, card: Card) {
        debug_assert!(self.cards.len() < 5);
        self.cards.push(card);
    }

    /// The street implied by the board length. Total: malformed lengths
    /// degrade to the nearest earlier street rather than failing.
    pub fn street(&self) -> Street {
        match self.cards.len() {
            0..=2 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }
}

impl FromStr for Board {
    type Err = ParseCardError;

    /// Parse a board from text like "AhKsQd".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace(' ', "");
        if s.is_empty() {
            return Ok(Self::new());
        }
        if s.len() % 2 != 0 || s.len() > 10 {
            return Err(ParseCardError::BadLength(s.len()));
        }
        let mut cards = Vec::with_capacity(5);
        for i in (0..s.len()).step_by(2) {
            cards.push(s[i..i + 2].parse()?);
        }
        Ok(Self::from_cards(cards))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "preflop"),
            Street::Flop => write!(f, "flop"),
            Street::Turn => write!(f, "turn"),
            Street::River => write!(f, "river"),
        }
    }
}

/// A deck of 52 cards with dead cards removed, for Monte Carlo rollouts.
#[derive(Clone)]
pub struct Deck {
    cards: Vec<Card>,
    index: usize,
}

impl Deck {
    /// Create a deck with the given cards removed.
    pub fn without(dead: &[Card]) -> Self {
        let mut mask = 0u64;
        for card in dead {
            mask |= 1u64 << card.id();
        }
        let cards = (0..52u8)
            .filter(|id| mask & (1u64 << id) == 0)
            .map(Card::from_id)
            .collect();
        Self { cards, index: 0 }
    }

    /// Shuffle the undealt portion of the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards[self.index..].shuffle(rng);
    }

    /// Deal the next card, or `None` when the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.index).copied()?;
        self.index += 1;
        Some(card)
    }

    /// Number of undealt cards.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.remaining())
    }
}
