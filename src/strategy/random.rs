//! Uniform random choice.

use crate::core::{GameRng, Move};
use crate::rules::Position;

use super::Strategy;

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create with a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, position: &Position) -> Option<Move> {
        let moves = position.legal_moves();
        self.rng.choose(&moves).copied()
    }
}
