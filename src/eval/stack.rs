//! Stack depth classification.

use std::fmt;

/// Stack depth zones in big blinds. The six zones partition [0, inf) with
/// boundaries at 6 / 12 / 20 / 40 / 80.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackZone {
    /// Below 6bb.
    UltraShort,
    /// 6-12bb.
    Short,
    /// 12-20bb.
    Pressure,
    /// 20-40bb.
    Medium,
    /// 40-80bb.
    Standard,
    /// 80bb and up.
    Deep,
}

impl StackZone {
    /// Classify a stack expressed in big blinds.
    pub fn from_bb(stack_bb: f64) -> Self {
        if stack_bb < 6.0 {
            StackZone::UltraShort
        } else if stack_bb < 12.0 {
            StackZone::Short
        } else if stack_bb < 20.0 {
            StackZone::Pressure
        } else if stack_bb < 40.0 {
            StackZone::Medium
        } else if stack_bb < 80.0 {
            StackZone::Standard
        } else {
            StackZone::Deep
        }
    }

    /// Zones where the preflop engine delegates to the push/fold table.
    pub fn is_push_fold(&self) -> bool {
        matches!(
            self,
            StackZone::UltraShort | StackZone::Short | StackZone::Pressure
        )
    }

    /// Genuinely short stacks (at most 12bb).
    pub fn is_short(&self) -> bool {
        matches!(self, StackZone::UltraShort | StackZone::Short)
    }

    /// 80bb or more.
    pub fn is_deep(&self) -> bool {
        matches!(self, StackZone::Deep)
    }
}

impl fmt::Display for StackZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackZone::UltraShort => "ULTRA_SHORT",
            StackZone::Short => "SHORT",
            StackZone::Pressure => "PRESSURE",
            StackZone::Medium => "MEDIUM",
            StackZone::Standard => "STANDARD",
            StackZone::Deep => "DEEP",
        };
        write!(f, "{}", name)
    }
}
