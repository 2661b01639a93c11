//! Preflop decision engine.
//!
//! A situational classifier (unopened / limped / facing-open /
//! facing-reraise) feeding range-table lookups and fixed sizing rules, with
//! a binary push/fold override at shallow stack depths. Every branch
//! terminates in a currently legal action.

use super::ranges::{tables, FacingOpenBucket, SqueezeBucket};
use crate::state::table::{Decision, LegalActions};
use crate::state::{GameState, Position, PreflopContext};

/// Situation the hero faces when the action reaches them preflop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreflopSituation {
    /// Nobody has voluntarily put money in.
    Unopened,
    /// At least one limper, no raise.
    Limped,
    /// Exactly one raise in front.
    FacingOpen,
    /// Two or more raises in front.
    FacingReraise,
}

/// Classify the situation from the context counts. Priority order matters:
/// reraise beats open beats limped.
pub fn classify_situation(ctx: &PreflopContext) -> PreflopSituation {
    if ctx.raises_before >= 2 {
        PreflopSituation::FacingReraise
    } else if ctx.raises_before == 1 {
        PreflopSituation::FacingOpen
    } else if ctx.limpers_before > 0 {
        PreflopSituation::Limped
    } else {
        PreflopSituation::Unopened
    }
}

/// Select the preflop action.
pub fn decide(state: &GameState, legal: &LegalActions) -> Decision {
    let ctx = match &state.preflop {
        Some(ctx) => ctx,
        None => return legal.fold_or_check(),
    };
    let situation = classify_situation(ctx);
    let code = state.hole_cards.code();

    log::debug!(
        "preflop: hand={} pos={} zone={} situation={:?}",
        code,
        state.position,
        state.stack_zone,
        situation
    );

    // Shallow stacks play binary push/fold, except against a reraise where
    // the dedicated logic below applies.
    if state.stack_zone.is_push_fold() && situation != PreflopSituation::FacingReraise {
        return push_fold(state, legal, &code);
    }

    match situation {
        PreflopSituation::Unopened => unopened(state, legal, &code),
        PreflopSituation::FacingOpen => facing_open(state, legal, ctx, &code),
        PreflopSituation::FacingReraise => facing_reraise(state, legal, ctx, &code),
        PreflopSituation::Limped => limped(state, legal, &code),
    }
}

// ---------------------------------------------------------------------------
// Push/fold override
// ---------------------------------------------------------------------------

/// Binary jam-or-fold from the static push table.
fn push_fold(state: &GameState, legal: &LegalActions, code: &str) -> Decision {
    if tables().in_push_range(state.position, code) {
        log::debug!("push/fold: {} jams from {}", code, state.position);
        return jam_or_fold(legal);
    }
    log::debug!("push/fold: {} not in {} push range", code, state.position);
    Decision::Fold
}

// ---------------------------------------------------------------------------
// Situation handlers
// ---------------------------------------------------------------------------

fn unopened(state: &GameState, legal: &LegalActions, code: &str) -> Decision {
    // The big blind closes an unopened pot with a free check.
    if state.position == Position::Bb {
        return legal.call_or_fold();
    }
    if tables().in_open_range(state.position, code) {
        return open_raise(state, legal);
    }
    legal.fold_or_check()
}

fn facing_open(
    state: &GameState,
    legal: &LegalActions,
    ctx: &PreflopContext,
    code: &str,
) -> Decision {
    // An open that has already been called reroutes to the squeeze policy.
    if ctx.callers_before >= 1 {
        return squeeze(state, legal, code);
    }

    // The big blind defends its whole defend set by calling, whatever the
    // bucket says.
    if state.position == Position::Bb && tables().in_bb_defend(code) {
        log::debug!("bb defend: calling with {}", code);
        return legal.call_or_fold();
    }

    match tables().facing_open_bucket(state.position, code) {
        Some(FacingOpenBucket::Value3Bet) | Some(FacingOpenBucket::Bluff3Bet) => {
            raise_3bet(state, legal)
        }
        Some(FacingOpenBucket::Call) => legal.call_or_fold(),
        None => legal.fold_or_check(),
    }
}

fn facing_reraise(
    state: &GameState,
    legal: &LegalActions,
    ctx: &PreflopContext,
    code: &str,
) -> Decision {
    // Hard cap: once the pot is 4-bet or more, only the tiny premium set
    // continues, and it continues by jamming.
    if ctx.raises_before >= 3 {
        if tables().in_premium_cap(code) {
            log::debug!("hard cap: {} jams", code);
            return jam_or_call(legal);
        }
        log::debug!("hard cap: {} folds", code);
        return legal.fold_or_check();
    }

    // Short stacks have no 4-bet sizing room: jam the value set or fold.
    if state.stack_zone.is_short() {
        if tables().in_value_4bet(code) {
            return jam_or_call(legal);
        }
        return legal.fold_or_check();
    }

    if tables().in_value_4bet(code) {
        return raise_4bet(state, legal);
    }
    if state.in_position && tables().in_call_3bet(code) {
        log::debug!("flatting the 3-bet in position with {}", code);
        return legal.call_or_fold();
    }
    legal.fold_or_check()
}

fn limped(state: &GameState, legal: &LegalActions, code: &str) -> Decision {
    // The big blind takes its free look at the flop.
    if state.position == Position::Bb {
        return legal.fold_or_check();
    }
    if tables().in_limp_iso(state.position, code) {
        return raise_limp_iso(state, legal);
    }
    legal.fold_or_check()
}

fn squeeze(state: &GameState, legal: &LegalActions, code: &str) -> Decision {
    match tables().squeeze_bucket(code) {
        Some(SqueezeBucket::StrongValue) => {
            log::debug!("squeeze: 3-betting {}", code);
            raise_3bet(state, legal)
        }
        Some(SqueezeBucket::MediumValue) => legal.call_or_fold(),
        None => legal.fold_or_check(),
    }
}

// ---------------------------------------------------------------------------
// Sizing helpers
// ---------------------------------------------------------------------------

/// Standard tournament open: 2.2x the big blind, clamped to the window.
fn open_raise(state: &GameState, legal: &LegalActions) -> Decision {
    let target = (state.big_blind as f64 * 2.2).round() as u32;
    raise_to(legal, target)
}

/// 3-bet to 3x the open in position, 3.5x out of position.
fn raise_3bet(state: &GameState, legal: &LegalActions) -> Decision {
    let multiplier = if state.in_position { 3.0 } else { 3.5 };
    let target = (state.to_call as f64 * multiplier).round() as u32;
    raise_to(legal, target)
}

/// 4-bet to 2.2x the 3-bet size.
fn raise_4bet(state: &GameState, legal: &LegalActions) -> Decision {
    let target = (state.to_call as f64 * 2.2).round() as u32;
    raise_to(legal, target)
}

/// Isolate limpers to 4x the big blind.
fn raise_limp_iso(state: &GameState, legal: &LegalActions) -> Decision {
    raise_to(legal, state.big_blind * 4)
}

/// Clamp a raise target into the legal window, degrading to a call when
/// raising is unavailable or the bounds are invalid.
fn raise_to(legal: &LegalActions, target: u32) -> Decision {
    match legal.clamp_raise(target) {
        Some(amount) => {
            log::debug!("raise target {} -> {}", target, amount);
            Decision::Raise(amount)
        }
        None => {
            log::debug!("raise unavailable, falling back to call");
            legal.call_or_fold()
        }
    }
}

/// All-in, degrading to a call and then a fold.
fn jam_or_call(legal: &LegalActions) -> Decision {
    match legal.max_raise() {
        Some(max) => Decision::Raise(max),
        None => legal.call_or_fold(),
    }
}

/// All-in or give up; the push/fold table knows no middle ground.
fn jam_or_fold(legal: &LegalActions) -> Decision {
    match legal.max_raise() {
        Some(max) => Decision::Raise(max),
        None => Decision::Fold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::StackZone;
    use crate::testutil::{legal, legal_no_raise, state_with};

    fn ctx(raises: u32, callers: u32, limpers: u32) -> PreflopContext {
        PreflopContext {
            raises_before: raises,
            callers_before: callers,
            limpers_before: limpers,
            players_left_to_act: 2,
            is_closing_action: false,
            last_raiser: None,
        }
    }

    fn preflop_state(hole: &str, raises: u32, callers: u32, limpers: u32) -> GameState {
        let mut state = state_with(hole, "");
        state.preflop = Some(ctx(raises, callers, limpers));
        state
    }

    #[test]
    fn test_situation_priority() {
        assert_eq!(classify_situation(&ctx(0, 0, 0)), PreflopSituation::Unopened);
        assert_eq!(classify_situation(&ctx(0, 0, 2)), PreflopSituation::Limped);
        assert_eq!(classify_situation(&ctx(1, 0, 1)), PreflopSituation::FacingOpen);
        assert_eq!(classify_situation(&ctx(2, 1, 0)), PreflopSituation::FacingReraise);
        assert_eq!(classify_situation(&ctx(3, 0, 0)), PreflopSituation::FacingReraise);
    }

    #[test]
    fn test_bb_checks_unopened_with_anything() {
        let mut state = preflop_state("7h2d", 0, 0, 0);
        state.position = Position::Bb;
        assert_eq!(decide(&state, &legal(0, 40, 1000)), Decision::Call(0));
    }

    #[test]
    fn test_open_raise_sizing() {
        let state = preflop_state("AhAd", 0, 0, 0);
        // 2.2 x 20bb blind = 44, inside the window.
        assert_eq!(decide(&state, &legal(0, 40, 1000)), Decision::Raise(44));
        // Clamped up to the minimum.
        assert_eq!(decide(&state, &legal(0, 60, 1000)), Decision::Raise(60));
        // Raise unavailable: degrade to a call.
        assert_eq!(decide(&state, &legal_no_raise(0)), Decision::Call(0));
    }

    #[test]
    fn test_unopened_junk_folds_or_checks() {
        let state = preflop_state("7h2d", 0, 0, 0);
        assert_eq!(decide(&state, &legal(20, 40, 1000)), Decision::Fold);
        assert_eq!(decide(&state, &legal(0, 40, 1000)), Decision::Call(0));
    }

    #[test]
    fn test_facing_open_buckets() {
        // BTN value 3-bet, in position: 3x the open of 60 = 180.
        let mut state = preflop_state("QhQd", 1, 0, 0);
        state.to_call = 60;
        assert_eq!(decide(&state, &legal(60, 120, 1000)), Decision::Raise(180));

        // Same hand out of position 3-bets bigger: 3.5x = 210.
        state.in_position = false;
        assert_eq!(decide(&state, &legal(60, 120, 1000)), Decision::Raise(210));

        // A calling-bucket hand flats.
        let mut state = preflop_state("5h5d", 1, 0, 0);
        state.to_call = 60;
        assert_eq!(decide(&state, &legal(60, 120, 1000)), Decision::Call(60));

        // Junk folds.
        let mut state = preflop_state("7h2d", 1, 0, 0);
        state.to_call = 60;
        assert_eq!(decide(&state, &legal(60, 120, 1000)), Decision::Fold);
    }

    #[test]
    fn test_bb_defend_overrides_bucket() {
        // T7s is in the defend set but in no BB facing-open bucket.
        let mut state = preflop_state("Ts7s", 1, 0, 0);
        state.position = Position::Bb;
        state.to_call = 40;
        assert_eq!(decide(&state, &legal(40, 80, 1000)), Decision::Call(40));
    }

    #[test]
    fn test_squeeze_reroute() {
        // Open plus caller: strong value squeezes.
        let mut state = preflop_state("KhKd", 1, 1, 0);
        state.to_call = 60;
        state.in_position = false;
        assert_eq!(decide(&state, &legal(60, 120, 1000)), Decision::Raise(210));

        // Medium value calls the open instead.
        let mut state = preflop_state("JhJd", 1, 1, 0);
        state.to_call = 60;
        assert_eq!(decide(&state, &legal(60, 120, 1000)), Decision::Call(60));

        // Anything else is too weak multiway.
        let mut state = preflop_state("8h7h", 1, 1, 0);
        state.to_call = 60;
        assert_eq!(decide(&state, &legal(60, 120, 1000)), Decision::Fold);
    }

    #[test]
    fn test_hard_cap_at_three_raises() {
        // 77 facing a 4-bet folds no matter the stack.
        let mut state = preflop_state("7h7d", 3, 0, 0);
        state.to_call = 400;
        assert_eq!(decide(&state, &legal(400, 800, 1000)), Decision::Fold);

        // AA jams for the table maximum.
        let mut state = preflop_state("AhAd", 3, 0, 0);
        state.to_call = 400;
        assert_eq!(decide(&state, &legal(400, 800, 1000)), Decision::Raise(1000));
    }

    #[test]
    fn test_facing_reraise_deep() {
        // Deep stacks 4-bet the value set: 2.2 x 200 = 440.
        let mut state = preflop_state("AhKh", 2, 0, 0);
        state.to_call = 200;
        assert_eq!(decide(&state, &legal(200, 400, 2000)), Decision::Raise(440));

        // JJ flats in position only.
        let mut state = preflop_state("JhJd", 2, 0, 0);
        state.to_call = 200;
        state.in_position = true;
        assert_eq!(decide(&state, &legal(200, 400, 2000)), Decision::Call(200));
        state.in_position = false;
        assert_eq!(decide(&state, &legal(200, 400, 2000)), Decision::Fold);
    }

    #[test]
    fn test_facing_reraise_short_jams_value() {
        let mut state = preflop_state("QhQd", 2, 0, 0);
        state.stack = 200; // 10bb
        state.stack_zone = StackZone::from_bb(10.0);
        state.to_call = 120;
        assert_eq!(decide(&state, &legal(120, 160, 200)), Decision::Raise(200));

        let mut state = preflop_state("JhJd", 2, 0, 0);
        state.stack = 200;
        state.stack_zone = StackZone::from_bb(10.0);
        state.to_call = 120;
        assert_eq!(decide(&state, &legal(120, 160, 200)), Decision::Fold);
    }

    #[test]
    fn test_push_fold_override() {
        // SHORT stack on the button: A9o is in the push set.
        let mut state = preflop_state("Ah9d", 0, 0, 0);
        state.stack = 200; // 10bb
        state.stack_zone = StackZone::from_bb(10.0);
        assert_eq!(decide(&state, &legal(20, 40, 200)), Decision::Raise(200));

        // 72o is not.
        let mut state = preflop_state("7h2d", 0, 0, 0);
        state.stack = 200;
        state.stack_zone = StackZone::from_bb(10.0);
        assert_eq!(decide(&state, &legal(20, 40, 200)), Decision::Fold);
    }

    #[test]
    fn test_push_fold_skipped_when_facing_reraise() {
        // PRESSURE stack facing a reraise goes through the reraise logic,
        // not the push table: JJ is in the BTN push set but folds here.
        let mut state = preflop_state("JhJd", 2, 0, 0);
        state.stack = 300; // 15bb
        state.stack_zone = StackZone::from_bb(15.0);
        state.to_call = 120;
        state.in_position = false;
        assert_eq!(decide(&state, &legal(120, 240, 300)), Decision::Fold);
    }

    #[test]
    fn test_limped_pot() {
        // BB checks its option unconditionally.
        let mut state = preflop_state("AhAd", 0, 0, 2);
        state.position = Position::Bb;
        assert_eq!(decide(&state, &legal(0, 40, 1000)), Decision::Call(0));

        // Button isolates with the iso range: 4x bb = 80.
        let mut state = preflop_state("AhTd", 0, 0, 2);
        state.to_call = 20;
        assert_eq!(decide(&state, &legal(20, 40, 1000)), Decision::Raise(80));

        // Out-of-range hands check behind or fold.
        let mut state = preflop_state("7h2d", 0, 0, 2);
        state.to_call = 20;
        assert_eq!(decide(&state, &legal(20, 40, 1000)), Decision::Fold);
    }

    #[test]
    fn test_missing_context_degrades() {
        let state = state_with("AhAd", "");
        assert_eq!(decide(&state, &legal(20, 40, 1000)), Decision::Fold);
        assert_eq!(decide(&state, &legal(0, 40, 1000)), Decision::Call(0));
    }

    #[test]
    fn test_raise_amounts_stay_in_window() {
        // A tiny max forces the 3-bet down into the window.
        let mut state = preflop_state("QhQd", 1, 0, 0);
        state.to_call = 60;
        match decide(&state, &legal(60, 80, 100)) {
            Decision::Raise(amount) => assert!((80..=100).contains(&amount)),
            other => panic!("expected a raise, got {:?}", other),
        }
    }
}
