//! Flop policy.
//!
//! Branches on whether the hero carried the preflop initiative. The
//! aggressor line is tiered by an estimated nut advantage crossed with the
//! hand category and the stack-to-pot ratio; the defender line is a
//! raise/call/fold ladder against a bet and a category-driven stab when
//! checked to.

use super::category::{categorize, HandCategory};
use super::texture::BoardTexture;
use super::{bet_fraction, check_or_call};
use crate::state::table::{Decision, LegalActions};
use crate::state::GameState;
use rand::Rng;

/// Select the flop action.
pub fn decide<R: Rng>(state: &GameState, legal: &LegalActions, rng: &mut R) -> Decision {
    let texture = match BoardTexture::analyze(&state.board) {
        Some(texture) => texture,
        None => return legal.fold_or_check(),
    };
    let category = categorize(state);
    let aggressor = state.is_preflop_aggressor;
    let range_adv = range_advantage(&texture, aggressor);

    log::debug!(
        "flop: category={} aggressor={} wet_score={} range_adv={:.2} spr={:.1}",
        category,
        aggressor,
        texture.wet_score,
        range_adv,
        state.spr()
    );

    if aggressor {
        aggressor_line(state, legal, category, &texture, rng)
    } else {
        defender_line(state, legal, category, &texture)
    }
}

/// Continuation-betting line for the preflop aggressor.
fn aggressor_line<R: Rng>(
    state: &GameState,
    legal: &LegalActions,
    category: HandCategory,
    texture: &BoardTexture,
    rng: &mut R,
) -> Decision {
    let nut_adv = nut_advantage(texture, true);
    let high_spr = state.spr() >= 6.0;

    // High nut advantage: polar, sized up; deep stacks tighten the
    // stack-off threshold and the bluff frequency.
    if nut_adv >= 0.6 {
        return if high_spr {
            match category {
                HandCategory::Nuts => bet_fraction(state, legal, 1.0),
                HandCategory::StrongMade => bet_fraction(state, legal, 0.66),
                HandCategory::StrongDraw => bet_fraction(state, legal, 0.33),
                HandCategory::Air if rng.gen::<f64>() < 0.30 => bet_fraction(state, legal, 0.33),
                _ => check_or_call(legal),
            }
        } else {
            match category {
                HandCategory::Nuts => bet_fraction(state, legal, 1.0),
                HandCategory::StrongMade => bet_fraction(state, legal, 0.66),
                HandCategory::StrongDraw => bet_fraction(state, legal, 1.0),
                HandCategory::Air if rng.gen::<f64>() < 0.45 => bet_fraction(state, legal, 1.0),
                _ => check_or_call(legal),
            }
        };
    }

    // Medium nut advantage: smaller and more merged.
    if nut_adv >= 0.45 {
        return match category {
            HandCategory::Nuts => bet_fraction(state, legal, 0.66),
            HandCategory::StrongMade => bet_fraction(state, legal, 0.33),
            HandCategory::StrongDraw => bet_fraction(state, legal, 0.33),
            HandCategory::Air if rng.gen::<f64>() < 0.25 => bet_fraction(state, legal, 0.33),
            _ => check_or_call(legal),
        };
    }

    // Low nut advantage: give up except for the top of the range and
    // semi-bluffs on boards that smash nobody.
    match category {
        HandCategory::Nuts => bet_fraction(state, legal, 0.66),
        HandCategory::StrongDraw if texture.wet => bet_fraction(state, legal, 0.33),
        _ => check_or_call(legal),
    }
}

/// Line for the player without the preflop initiative.
fn defender_line(
    state: &GameState,
    legal: &LegalActions,
    category: HandCategory,
    texture: &BoardTexture,
) -> Decision {
    let high_spr = state.spr() >= 6.0;

    if state.to_call > 0 {
        // Deep: do not stack off light.
        if high_spr {
            return match category {
                HandCategory::Nuts => raise_for_value(state, legal),
                HandCategory::StrongMade | HandCategory::StrongDraw => legal.call_or_fold(),
                _ if state.equity > state.pot_odds => legal.call_or_fold(),
                _ => Decision::Fold,
            };
        }
        // Low/mid SPR: strong made hands raise too.
        return match category {
            HandCategory::Nuts | HandCategory::StrongMade => raise_for_value(state, legal),
            HandCategory::StrongDraw => legal.call_or_fold(),
            _ if state.equity > state.pot_odds => legal.call_or_fold(),
            _ => Decision::Fold,
        };
    }

    // Checked to: stab by category.
    match category {
        HandCategory::Nuts => bet_fraction(state, legal, 0.66),
        HandCategory::StrongMade => bet_fraction(state, legal, 0.33),
        HandCategory::StrongDraw if texture.wet => bet_fraction(state, legal, 0.33),
        _ => check_or_call(legal),
    }
}

/// Raise a bet for value, sized down at high SPR.
fn raise_for_value(state: &GameState, legal: &LegalActions) -> Decision {
    if state.spr() >= 6.0 {
        return bet_fraction(state, legal, 0.33);
    }
    bet_fraction(state, legal, 0.66)
}

/// How much of the nutted region of the board belongs to the aggressor.
/// Base 0.5, additive adjustments, clamped to [0, 1].
fn nut_advantage(texture: &BoardTexture, aggressor: bool) -> f64 {
    let mut advantage: f64 = 0.5;
    if texture.paired && aggressor {
        advantage += 0.15;
    }
    if texture.high_card_heavy && aggressor {
        advantage += 0.15;
    }
    if texture.monotone && aggressor {
        advantage += 0.10;
    }
    if texture.connected && texture.low_board && !aggressor {
        advantage += 0.15;
    }
    if texture.wet {
        advantage -= 0.10;
    }
    advantage.clamp(0.0, 1.0)
}

/// Overall range strength on this board, same construction as the nut
/// advantage. Currently informational: logged, not branched on.
fn range_advantage(texture: &BoardTexture, aggressor: bool) -> f64 {
    let mut advantage: f64 = 0.5;
    if aggressor {
        advantage += 0.1;
    }
    if texture.high_card_heavy {
        advantage += 0.1;
    }
    if texture.low_board && !aggressor {
        advantage += 0.1;
    }
    if texture.paired {
        advantage += 0.05;
    }
    if texture.wet {
        advantage -= 0.1;
    }
    advantage.clamp(0.0, 1.0)
}
