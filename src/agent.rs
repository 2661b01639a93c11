//! The decision agent.
//!
//! [`Agent`] owns the equity oracle, the configuration, and the PRNG behind
//! randomized mixed strategies. Each call to [`Agent::decide`] is
//! independent: build the state snapshot, pick the street policy, return
//! one legal action. The agent never fails to act; a snapshot it cannot
//! make sense of degrades to checking or folding.

use crate::cards::{HoleCards, Street};
use crate::eval::{EquityOracle, MonteCarloOracle};
use crate::state::table::{Decision, LegalActions, TableSnapshot};
use crate::state::GameState;
use crate::strategy::{flop, preflop, river, turn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Monte Carlo rollouts per equity estimate.
    pub simulations: usize,
    /// Seed for the mixed-strategy PRNG; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            simulations: 500,
            seed: None,
        }
    }
}

/// The layered decision policy behind one seat.
#[derive(Debug)]
pub struct Agent<O: EquityOracle = MonteCarloOracle> {
    oracle: O,
    config: AgentConfig,
    rng: StdRng,
}

impl Agent<MonteCarloOracle> {
    /// Agent with the default Monte Carlo oracle.
    pub fn new(config: AgentConfig) -> Self {
        Self::with_oracle(MonteCarloOracle, config)
    }
}

impl Default for Agent<MonteCarloOracle> {
    fn default() -> Self {
        Self::new(AgentConfig::default())
    }
}

impl<O: EquityOracle> Agent<O> {
    /// Agent with a caller-provided oracle.
    pub fn with_oracle(oracle: O, config: AgentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            oracle,
            config,
            rng,
        }
    }

    /// Select exactly one action for the hero. Total: every failure mode
    /// degrades to a currently legal action.
    pub fn decide(
        &mut self,
        snapshot: &TableSnapshot,
        hole_cards: HoleCards,
        hero_uuid: &str,
        legal: &LegalActions,
    ) -> Decision {
        let state = match GameState::build(
            snapshot,
            hole_cards,
            hero_uuid,
            legal,
            &self.oracle,
            self.config.simulations,
        ) {
            Some(state) => state,
            None => {
                log::debug!("unusable snapshot, degrading to fold/check");
                return legal.fold_or_check();
            }
        };

        let decision = match state.street {
            Street::Preflop => preflop::decide(&state, legal),
            Street::Flop => flop::decide(&state, legal, &mut self.rng),
            Street::Turn => turn::decide(&state, legal, &mut self.rng),
            Street::River => river::decide(&state, legal, &mut self.rng),
        };

        log::debug!("decision: {}", decision);
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;
    use crate::state::table::{
        ActionKind, ActionLog, ActionRecord, RaiseBounds, Seat, SeatState,
    };

    /// Fixed-equity oracle keeping agent tests deterministic.
    struct FixedOracle(f64);

    impl EquityOracle for FixedOracle {
        fn estimate_win_rate(&self, _: &HoleCards, _: &Board, _: usize, _: usize) -> f64 {
            self.0
        }
    }

    fn agent(equity: f64) -> Agent<FixedOracle> {
        Agent::with_oracle(
            FixedOracle(equity),
            AgentConfig {
                simulations: 1,
                seed: Some(42),
            },
        )
    }

    fn seat(uuid: &str, stack: u32) -> Seat {
        Seat {
            uuid: uuid.to_string(),
            stack,
            state: SeatState::Participating,
        }
    }

    fn snapshot(board: &str) -> TableSnapshot {
        TableSnapshot {
            board: board.parse().unwrap(),
            pot: 30,
            seats: vec![seat("hero", 1000), seat("v1", 1000), seat("v2", 1000)],
            dealer_btn: 0,
            big_blind: 20,
            actions: ActionLog::default(),
        }
    }

    fn legal(call: u32, min: i64, max: i64) -> LegalActions {
        LegalActions {
            can_fold: true,
            call: Some(call),
            raise: Some(RaiseBounds { min, max }),
        }
    }

    #[test]
    fn test_preflop_open_raise_end_to_end() {
        // Hero on the button, unopened pot, premium hand: 2.2bb open.
        let decision = agent(0.85).decide(
            &snapshot(""),
            "AhAd".parse().unwrap(),
            "hero",
            &legal(20, 40, 1000),
        );
        assert_eq!(decision, Decision::Raise(44));
    }

    #[test]
    fn test_preflop_junk_folds_end_to_end() {
        let decision = agent(0.30).decide(
            &snapshot(""),
            "7h2d".parse().unwrap(),
            "hero",
            &legal(20, 40, 1000),
        );
        assert_eq!(decision, Decision::Fold);
    }

    #[test]
    fn test_flop_defender_journey() {
        // Villain raised preflop and still holds the lead; hero flopped a
        // strong made hand at mid SPR facing a bet: raise for value.
        let mut snap = snapshot("AhKhQh");
        snap.pot = 120;
        snap.seats[0].stack = 400;
        snap.actions.preflop = vec![ActionRecord {
            uuid: "v1".to_string(),
            kind: ActionKind::Raise,
            amount: 60,
        }];
        let decision = agent(0.70).decide(
            &snap,
            "AsAd".parse().unwrap(),
            "hero",
            &legal(60, 120, 1000),
        );
        // 66% of the 120 pot, clamped up to the minimum legal raise.
        assert_eq!(decision, Decision::Raise(120));
    }

    #[test]
    fn test_river_value_bet_journey() {
        let mut snap = snapshot("Ah7c2cQh9h");
        snap.pot = 200;
        let decision = agent(0.70).decide(
            &snap,
            "AsAd".parse().unwrap(),
            "hero",
            &legal(0, 40, 1000),
        );
        // Strong made checked to: 80% pot.
        assert_eq!(decision, Decision::Raise(160));
    }

    #[test]
    fn test_unknown_hero_never_panics() {
        let decision = agent(0.50).decide(
            &snapshot(""),
            "AhAd".parse().unwrap(),
            "ghost",
            &legal(20, 40, 1000),
        );
        assert_eq!(decision, Decision::Fold);
    }

    #[test]
    fn test_malformed_action_set_never_panics() {
        let broken = LegalActions {
            can_fold: false,
            call: None,
            raise: None,
        };
        let decision = agent(0.50).decide(
            &snapshot(""),
            "AhAd".parse().unwrap(),
            "hero",
            &broken,
        );
        assert_eq!(decision, Decision::Fold);
    }

    #[test]
    fn test_raise_always_inside_window() {
        // Whatever the spot, a returned raise must respect the bounds.
        let windows = [(40i64, 90i64), (100, 100), (40, 2000)];
        for (min, max) in windows {
            let decision = agent(0.85).decide(
                &snapshot(""),
                "AhAd".parse().unwrap(),
                "hero",
                &legal(20, min, max),
            );
            if let Decision::Raise(amount) = decision {
                assert!((min as u32..=max as u32).contains(&amount));
            }
        }
    }
}
