//! # nlhe-agent
//!
//! A deterministic decision engine for an autonomous agent playing no-limit
//! hold'em tournaments. Each decision is independent: the orchestration
//! hands over a raw table snapshot plus the legal actions, the engine
//! derives a compact feature model and selects exactly one action.
//!
//! ## Pipeline
//!
//! ```text
//!  TableSnapshot ──► GameState builder ──┬──► Preflop policy ────────┐
//!   (orchestration)  position, stacks,   │    (situation + ranges)   │
//!                    pot odds, equity,   │                           ▼
//!                    hand classification └──► Hand category ──► street policy ──► Decision
//!                                             (postflop)       (flop/turn/river)
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: card, hole-card, board, and deck primitives
//! - [`eval`]: showdown ranking, heuristic classification, equity oracle,
//!   stack zones, pot odds
//! - [`state`]: orchestration-facing types and the composed [`GameState`]
//! - [`strategy`]: range tables, preflop state machine, board texture,
//!   hand categories, and the street policies
//! - [`agent`]: the top-level [`Agent`] wiring it all together
//!
//! The engine is synchronous and stateless across decisions; randomized
//! mixed strategies draw from an injectable, seedable PRNG so tests can
//! force either branch.

#![warn(missing_docs)]

pub mod agent;
pub mod cards;
pub mod eval;
pub mod state;
pub mod strategy;

pub use agent::{Agent, AgentConfig};
pub use cards::{Board, Card, HoleCards, Street};
pub use eval::{EquityOracle, MonteCarloOracle};
pub use state::{Decision, GameState, LegalActions, TableSnapshot};
pub use strategy::{BoardTexture, HandCategory};
