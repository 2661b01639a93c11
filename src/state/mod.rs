//! State model: raw table types from the orchestration, position
//! resolution, preflop history analysis, and the composed [`GameState`]
//! snapshot every policy consumes.

pub mod builder;
pub mod context;
pub mod position;
pub mod table;

pub use builder::GameState;
pub use context::{preflop_aggressor, PreflopContext};
pub use position::Position;
pub use table::{
    ActionKind, ActionLog, ActionRecord, Decision, LegalActions, RaiseBounds, Seat, SeatState,
    TableSnapshot,
};
