//! Monte Carlo equity estimation.
//!
//! The decision pipeline treats equity as an oracle behind the
//! [`EquityOracle`] trait; the provided [`MonteCarloOracle`] deals random
//! opponent hands and runouts and settles them with the showdown evaluator.
//! The oracle never fails: degenerate inputs collapse to 1.0 and internal
//! shortfalls (not enough cards to deal) count as losses.

use super::strength::rank_best;
use crate::cards::{Board, Card, Deck, HoleCards};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Simulation count for speed-sensitive spots.
pub const FAST_SIMULATIONS: usize = 200;

/// Win-rate estimator consumed by the state model builder.
pub trait EquityOracle: Send + Sync {
    /// Estimated probability that `hole` wins at showdown.
    ///
    /// `players` is the number of active players including the hero;
    /// anything at or below 1 trivially returns 1.0. The result is always
    /// in [0, 1] and the call never fails.
    fn estimate_win_rate(
        &self,
        hole: &HoleCards,
        board: &Board,
        players: usize,
        simulations: usize,
    ) -> f64;

    /// Reduced-budget estimate for speed-sensitive spots.
    fn estimate_win_rate_fast(&self, hole: &HoleCards, board: &Board, players: usize) -> f64 {
        self.estimate_win_rate(hole, board, players, FAST_SIMULATIONS)
    }
}

/// Default oracle: random opponent hands, random runouts, parallel batches.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonteCarloOracle;

/// Rollouts per rayon task.
const BATCH: usize = 128;

impl MonteCarloOracle {
    /// Sequential, caller-seeded estimation for deterministic tests.
    pub fn simulate<R: Rng>(
        hole: &HoleCards,
        board: &Board,
        players: usize,
        simulations: usize,
        rng: &mut R,
    ) -> f64 {
        if players <= 1 {
            return 1.0;
        }
        if simulations == 0 {
            return 0.0;
        }
        let mut wins = 0.0;
        for _ in 0..simulations {
            wins += rollout(hole, board, players - 1, rng);
        }
        wins / simulations as f64
    }
}

impl EquityOracle for MonteCarloOracle {
    fn estimate_win_rate(
        &self,
        hole: &HoleCards,
        board: &Board,
        players: usize,
        simulations: usize,
    ) -> f64 {
        if players <= 1 {
            return 1.0;
        }
        if simulations == 0 {
            return 0.0;
        }
        let opponents = players - 1;
        let batches = (simulations + BATCH - 1) / BATCH;
        let wins: f64 = (0..batches)
            .into_par_iter()
            .map(|i| {
                let runs = BATCH.min(simulations - i * BATCH);
                let mut rng = StdRng::from_entropy();
                let mut wins = 0.0;
                for _ in 0..runs {
                    wins += rollout(hole, board, opponents, &mut rng);
                }
                wins
            })
            .sum();
        wins / simulations as f64
    }
}

/// One simulated showdown. Returns the hero's share of the win:
/// 1.0 outright, split on ties, 0.0 otherwise. A deck shortfall is a loss.
fn rollout<R: Rng>(hole: &HoleCards, board: &Board, opponents: usize, rng: &mut R) -> f64 {
    let mut dead: Vec<Card> = hole.cards().to_vec();
    dead.extend_from_slice(board.cards());

    let mut deck = Deck::without(&dead);
    if deck.remaining() < 2 * opponents + 5usize.saturating_sub(board.len()) {
        return 0.0;
    }
    deck.shuffle(rng);

    let mut opp_holes = Vec::with_capacity(opponents);
    for _ in 0..opponents {
        let (c1, c2) = match (deck.deal(), deck.deal()) {
            (Some(a), Some(b)) => (a, b),
            _ => return 0.0,
        };
        opp_holes.push(HoleCards::new(c1, c2));
    }

    let mut runout: Vec<Card> = board.cards().to_vec();
    while runout.len() < 5 {
        match deck.deal() {
            Some(card) => runout.push(card),
            None => return 0.0,
        }
    }

    let hero_rank = rank_best(&seven(hole, &runout));
    let mut best_opp = None;
    let mut ties_at_best = 0usize;
    for opp in &opp_holes {
        let rank = rank_best(&seven(opp, &runout));
        match best_opp {
            None => {
                best_opp = Some(rank);
                ties_at_best = 1;
            }
            Some(best) if rank > best => {
                best_opp = Some(rank);
                ties_at_best = 1;
            }
            Some(best) if rank == best => ties_at_best += 1,
            _ => {}
        }
    }

    match best_opp {
        Some(best) if hero_rank > best => 1.0,
        Some(best) if hero_rank == best => 1.0 / (1.0 + ties_at_best as f64),
        Some(_) => 0.0,
        None => 1.0,
    }
}

fn seven(hole: &HoleCards, runout: &[Card]) -> [Card; 7] {
    [
        hole.card1,
        hole.card2,
        runout[0],
        runout[1],
        runout[2],
        runout[3],
        runout[4],
    ]
}
