//! Per-decision search statistics.

use serde::{Deserialize, Serialize};

/// What one MCTS decision did.
///
/// A decision with a single candidate or none at all runs no iterations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Legal cells at the root.
    pub root_moves: usize,

    /// Iterations completed.
    pub iterations: u32,

    /// Nodes added below the root.
    pub nodes_added: u32,

    /// Playouts run from a fresh leaf.
    pub rollouts: u32,

    /// Iterations that stopped on a known terminal node instead.
    pub terminal_hits: u32,

    /// Deepest node created, in plies below the root.
    pub deepest_ply: u16,

    /// The arena reached `max_nodes` before the iteration budget ran out.
    pub node_limit_hit: bool,

    /// Wall time in microseconds.
    pub elapsed_us: u64,
}

impl SearchStats {
    /// Check if any iteration ran.
    #[must_use]
    pub fn searched(&self) -> bool {
        self.iterations > 0
    }

    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.elapsed_us == 0 {
            0.0
        } else {
            f64::from(self.iterations) * 1_000_000.0 / self.elapsed_us as f64
        }
    }

    /// Share of iterations that ended in a rollout.
    ///
    /// Drops once the tree reaches the end of the game along most lines.
    #[must_use]
    pub fn rollout_share(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            f64::from(self.rollouts) / f64::from(self.iterations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_did_nothing() {
        let stats = SearchStats::default();
        assert!(!stats.searched());
        assert_eq!(stats.iterations_per_second(), 0.0);
        assert_eq!(stats.rollout_share(), 0.0);
    }

    #[test]
    fn test_rates() {
        let stats = SearchStats {
            root_moves: 9,
            iterations: 1000,
            rollouts: 750,
            terminal_hits: 250,
            elapsed_us: 500_000,
            ..SearchStats::default()
        };
        assert!(stats.searched());
        assert_eq!(stats.iterations_per_second(), 2000.0);
        assert_eq!(stats.rollout_share(), 0.75);
    }
}
