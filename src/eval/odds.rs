//! Pot odds.

/// Pot odds as a probability: the break-even calling equity.
/// Zero when there is nothing to call.
pub fn pot_odds(to_call: u32, pot: u32) -> f64 {
    if to_call == 0 {
        return 0.0;
    }
    to_call as f64 / (pot + to_call) as f64
}

/// Pot odds as a percentage (0-100).
pub fn pot_odds_percent(to_call: u32, pot: u32) -> f64 {
    pot_odds(to_call, pot) * 100.0
}

/// Minimum equity needed to call profitably. Alias for pot odds but
/// semantically clearer at call sites.
pub fn break_even_equity(to_call: u32, pot: u32) -> f64 {
    pot_odds(to_call, pot)
}
