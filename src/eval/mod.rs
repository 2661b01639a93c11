//! Hand evaluation: showdown ranking, the heuristic classifier, the Monte
//! Carlo equity oracle, stack depth zones, and pot odds.

pub mod classifier;
pub mod equity;
pub mod odds;
pub mod stack;
pub mod strength;

pub use classifier::{classify, Draws, HandStrength, MadeHand};
pub use equity::{EquityOracle, MonteCarloOracle, FAST_SIMULATIONS};
pub use odds::{break_even_equity, pot_odds, pot_odds_percent};
pub use stack::StackZone;
pub use strength::{rank_best, ShowdownClass, ShowdownRank};
