//! Shared board sets.
//!
//! All matchups of one size are played on the same boards, so differences
//! between strategies are never down to board sampling.

use crate::core::{Board, GameRng};

/// A fixed set of random boards of one size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSet {
    size: usize,
    boards: Vec<Board>,
}

impl BoardSet {
    /// Generate `count` boards with values in `min..=max`.
    ///
    /// Draws from the `boards/<size>` stream of `run_rng`, so a size's boards
    /// do not depend on which other sizes are swept.
    pub fn generate(run_rng: &GameRng, size: usize, count: usize, min: u32, max: u32) -> Self {
        let mut rng = run_rng.for_context(&format!("boards/{size}"));
        let boards = (0..count)
            .map(|_| Board::random(size, min, max, &mut rng))
            .collect();
        Self { size, boards }
    }

    /// Wrap existing boards, all of side `size`.
    pub fn from_boards(size: usize, boards: Vec<Board>) -> Self {
        debug_assert!(boards.iter().all(|b| b.size() == size));
        Self { size, boards }
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of boards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The boards, in generation order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }
}
