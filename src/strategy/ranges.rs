//! Static range tables.
//!
//! The strategy data lives in `data/ranges.json`, embedded in the crate and
//! parsed exactly once. Policies only ever ask membership questions; a
//! position or hand that is absent is simply "not in range", never an error.

use crate::state::Position;
use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;

/// Embedded default range configuration.
const DEFAULT_RANGES: &str = include_str!("../../data/ranges.json");

static TABLES: Lazy<RangeTables> = Lazy::new(|| {
    RangeTables::from_json(DEFAULT_RANGES).expect("embedded range config must parse")
});

/// The process-wide range tables.
pub fn tables() -> &'static RangeTables {
    &TABLES
}

/// Bucket returned for a hand facing a single open raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingOpenBucket {
    Value3Bet,
    Bluff3Bet,
    Call,
}

/// Bucket returned for a hand in a squeeze spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqueezeBucket {
    StrongValue,
    MediumValue,
}

// Raw serde mirror of the JSON schema.

#[derive(Debug, Deserialize)]
struct RawConfig {
    version: String,
    open: FxHashMap<String, Vec<String>>,
    facing_open: FxHashMap<String, RawFacingOpen>,
    bb_defend: Vec<String>,
    limp_iso: FxHashMap<String, Vec<String>>,
    squeeze: RawSqueeze,
    facing_reraise: RawFacingReraise,
    push: FxHashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawFacingOpen {
    value_3bet: Vec<String>,
    bluff_3bet: Vec<String>,
    call: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawSqueeze {
    strong_value: Vec<String>,
    medium_value: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawFacingReraise {
    premium_cap: Vec<String>,
    value_4bet: Vec<String>,
    call_3bet: Vec<String>,
}

type HandSet = FxHashSet<String>;
type PositionSets = FxHashMap<String, HandSet>;

/// Facing-open buckets for one position.
#[derive(Debug)]
struct FacingOpenSets {
    value_3bet: HandSet,
    bluff_3bet: HandSet,
    call: HandSet,
}

/// Immutable, versioned range tables loaded at startup.
#[derive(Debug)]
pub struct RangeTables {
    version: String,
    open: PositionSets,
    facing_open: FxHashMap<String, FacingOpenSets>,
    bb_defend: HandSet,
    limp_iso: PositionSets,
    squeeze_strong: HandSet,
    squeeze_medium: HandSet,
    premium_cap: HandSet,
    value_4bet: HandSet,
    call_3bet: HandSet,
    push: PositionSets,
}

fn set(hands: Vec<String>) -> HandSet {
    hands.into_iter().collect()
}

fn position_sets(raw: FxHashMap<String, Vec<String>>) -> PositionSets {
    raw.into_iter().map(|(pos, hands)| (pos, set(hands))).collect()
}

impl RangeTables {
    /// Parse tables from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Ok(Self {
            version: raw.version,
            open: position_sets(raw.open),
            facing_open: raw
                .facing_open
                .into_iter()
                .map(|(pos, sets)| {
                    (
                        pos,
                        FacingOpenSets {
                            value_3bet: set(sets.value_3bet),
                            bluff_3bet: set(sets.bluff_3bet),
                            call: set(sets.call),
                        },
                    )
                })
                .collect(),
            bb_defend: set(raw.bb_defend),
            limp_iso: position_sets(raw.limp_iso),
            squeeze_strong: set(raw.squeeze.strong_value),
            squeeze_medium: set(raw.squeeze.medium_value),
            premium_cap: set(raw.facing_reraise.premium_cap),
            value_4bet: set(raw.facing_reraise.value_4bet),
            call_3bet: set(raw.facing_reraise.call_3bet),
            push: position_sets(raw.push),
        })
    }

    /// Configuration version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    fn position_contains(sets: &PositionSets, position: Position, code: &str) -> bool {
        position
            .key()
            .and_then(|key| sets.get(key))
            .map_or(false, |hands| hands.contains(code))
    }

    /// Raise-first-in range membership.
    pub fn in_open_range(&self, position: Position, code: &str) -> bool {
        Self::position_contains(&self.open, position, code)
    }

    /// Bucket for a hand facing a single open raise, by position.
    pub fn facing_open_bucket(&self, position: Position, code: &str) -> Option<FacingOpenBucket> {
        let sets = self.facing_open.get(position.key()?)?;
        if sets.value_3bet.contains(code) {
            return Some(FacingOpenBucket::Value3Bet);
        }
        if sets.bluff_3bet.contains(code) {
            return Some(FacingOpenBucket::Bluff3Bet);
        }
        if sets.call.contains(code) {
            return Some(FacingOpenBucket::Call);
        }
        None
    }

    /// Big-blind defend set membership.
    pub fn in_bb_defend(&self, code: &str) -> bool {
        self.bb_defend.contains(code)
    }

    /// Limped-pot isolation range membership.
    pub fn in_limp_iso(&self, position: Position, code: &str) -> bool {
        Self::position_contains(&self.limp_iso, position, code)
    }

    /// Bucket for a squeeze spot (open raise plus at least one caller).
    pub fn squeeze_bucket(&self, code: &str) -> Option<SqueezeBucket> {
        if self.squeeze_strong.contains(code) {
            return Some(SqueezeBucket::StrongValue);
        }
        if self.squeeze_medium.contains(code) {
            return Some(SqueezeBucket::MediumValue);
        }
        None
    }

    /// The tiny premium set that continues once three or more raises have
    /// gone in.
    pub fn in_premium_cap(&self, code: &str) -> bool {
        self.premium_cap.contains(code)
    }

    /// Value 4-bet set membership.
    pub fn in_value_4bet(&self, code: &str) -> bool {
        self.value_4bet.contains(code)
    }

    /// Hands that flat a 3-bet (in position, deep only).
    pub fn in_call_3bet(&self, code: &str) -> bool {
        self.call_3bet.contains(code)
    }

    /// Push/fold table membership.
    pub fn in_push_range(&self, position: Position, code: &str) -> bool {
        Self::position_contains(&self.push, position, code)
    }
}
