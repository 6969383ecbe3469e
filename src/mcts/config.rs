//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// Rollout policy used from newly expanded leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RolloutKind {
    /// Uniformly random legal moves.
    #[default]
    Random,
    /// Highest-value legal move, lowest row then column on ties.
    Greedy,
}

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MCTSConfig {
    /// Iterations per decision.
    pub iterations: u32,

    /// UCB1 exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Maximum nodes to allocate in the tree.
    /// The search stops early once the arena reaches this size.
    pub max_nodes: usize,

    /// Random seed for expansion and rollouts.
    /// Same seed produces deterministic searches.
    pub seed: u64,

    /// Rollout policy.
    pub rollout: RolloutKind,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration_constant: std::f64::consts::SQRT_2,
            max_nodes: 100_000,
            seed: 42,
            rollout: RolloutKind::Random,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with a custom iteration budget.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom node limit.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Create a new config with a custom rollout policy.
    pub fn with_rollout(mut self, rollout: RolloutKind) -> Self {
        self.rollout = rollout;
        self
    }
}
