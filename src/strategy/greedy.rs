//! Greedy: take the most valuable legal cell.
//!
//! Ties go to the lowest row, then the lowest column.

use std::cmp::Reverse;

use crate::core::Move;
use crate::rules::Position;

use super::Strategy;

/// Maximises the immediate gain.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    /// Create a greedy strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, position: &Position) -> Option<Move> {
        let board = position.board();
        position
            .legal_moves()
            .into_iter()
            .filter_map(|mv| board.value(mv).map(|v| (mv, v)))
            .min_by_key(|&(mv, v)| (Reverse(v), mv.row, mv.col))
            .map(|(mv, _)| mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    #[test]
    fn test_diagonal_tie_picks_top_left() {
        let pos = Position::new(Board::from_rows(vec![vec![9, 1], vec![1, 9]]).unwrap());
        assert_eq!(GreedyStrategy::new().choose_move(&pos), Some(Move::new(0, 0)));
    }

    #[test]
    fn test_picks_maximum_in_row_or_column() {
        let mut pos = Position::new(
            Board::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap(),
        );
        pos.apply(Move::new(0, 0));
        // Row 0 holds 2, 3; column 0 holds 4, 7. The 9 is out of reach.
        assert_eq!(GreedyStrategy::new().choose_move(&pos), Some(Move::new(2, 0)));
    }

    #[test]
    fn test_tie_prefers_lower_row_then_column() {
        let mut pos = Position::new(
            Board::from_rows(vec![vec![1, 5, 5], vec![5, 1, 1], vec![5, 1, 1]]).unwrap(),
        );
        pos.apply(Move::new(0, 0));
        assert_eq!(GreedyStrategy::new().choose_move(&pos), Some(Move::new(0, 1)));
    }

    #[test]
    fn test_terminal_returns_none() {
        let mut pos = Position::new(Board::from_rows(vec![vec![2]]).unwrap());
        pos.apply(Move::new(0, 0));
        assert_eq!(GreedyStrategy::new().choose_move(&pos), None);
    }
}
