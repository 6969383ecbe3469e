//! MCTS as a `Strategy`.

use tracing::debug;

use crate::core::Move;
use crate::rules::Position;
use crate::strategy::Strategy;

use super::config::MCTSConfig;
use super::search::MCTSSearch;

/// Plays the most visited root move after a fixed iteration budget.
pub struct MCTSStrategy {
    search: MCTSSearch,
}

impl MCTSStrategy {
    /// Create from a configuration; `config.seed` drives all randomness.
    #[must_use]
    pub fn new(config: MCTSConfig) -> Self {
        Self {
            search: MCTSSearch::new(config),
        }
    }

    /// The underlying search, for statistics after a decision.
    #[must_use]
    pub fn search(&self) -> &MCTSSearch {
        &self.search
    }
}

impl Strategy for MCTSStrategy {
    fn name(&self) -> &str {
        "MCTS"
    }

    fn choose_move(&mut self, position: &Position) -> Option<Move> {
        let choice = self.search.search(position);
        let stats = self.search.stats();
        debug!(
            iterations = stats.iterations,
            rollouts = stats.rollouts,
            nodes = self.search.tree().len(),
            deepest_ply = stats.deepest_ply,
            elapsed_us = stats.elapsed_us,
            choice = ?choice,
            "mcts decision"
        );
        choice
    }
}
