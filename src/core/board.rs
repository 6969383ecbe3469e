//! Board representation: an N×N grid of cell values.
//!
//! ## Cells
//!
//! Every cell holds either a positive value or the consumed marker.
//! A consumed cell is never restored during a game.
//!
//! ## Persistence
//!
//! Cells are stored in an `im::Vector`, so cloning a board is O(1).
//! Tree searches clone the board once per explored child instead of
//! undoing moves.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::rng::GameRng;

/// A single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// An untaken cell with a positive value.
    Value(u32),
    /// A cell that has already been taken.
    Consumed,
}

impl Cell {
    /// Get the value of an untaken cell.
    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<u32> {
        match self {
            Cell::Value(v) => Some(v),
            Cell::Consumed => None,
        }
    }

    /// Check if this cell has been taken.
    #[inline]
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Cell::Consumed)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Value(v) => write!(f, "{}", v),
            Cell::Consumed => write!(f, "-"),
        }
    }
}

/// A board coordinate, 0-indexed.
///
/// Moves order row-major (`row` first, then `col`), which is also the
/// order the legality oracle enumerates an unconstrained board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if two moves share a row or a column.
    #[inline]
    #[must_use]
    pub const fn is_aligned_with(self, other: Move) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Square game board.
///
/// The size is fixed at construction. Cells are addressed by `Move`.
/// Serialized as rows of cells; deserializing goes through the same checks
/// as `from_rows`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
    remaining: usize,
}

impl Board {
    /// Build a board from rows of values.
    ///
    /// Rejects empty input, ragged rows, non-square shapes and zero values.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, BoardError> {
        Self::from_cells(
            rows.into_iter()
                .map(|row| row.into_iter().map(Cell::Value).collect())
                .collect(),
        )
    }

    /// Build a board from rows of cells, some possibly consumed.
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vector::new();
        let mut remaining = 0;
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                // The first row defines the expected width.
                return Err(if r == 0 {
                    BoardError::NotSquare {
                        rows: size,
                        cols: row.len(),
                    }
                } else {
                    BoardError::InconsistentRow {
                        row: r,
                        expected: size,
                        found: row.len(),
                    }
                });
            }
            for (c, cell) in row.into_iter().enumerate() {
                match cell {
                    Cell::Value(0) => {
                        return Err(BoardError::NonPositive {
                            row: r,
                            col: c,
                            value: 0,
                        });
                    }
                    Cell::Value(_) => remaining += 1,
                    Cell::Consumed => {}
                }
                cells.push_back(cell);
            }
        }

        Ok(Self {
            size,
            cells,
            remaining,
        })
    }

    /// Generate a board with independent uniform values in `min..=max`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `min` is zero or `min > max`.
    /// Callers validate these through `SimulationConfig::validate`.
    pub fn random(size: usize, min: u32, max: u32, rng: &mut GameRng) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        assert!(min > 0 && min <= max, "Cell value range must be positive and non-empty");

        let cells: Vector<Cell> = (0..size * size)
            .map(|_| Cell::Value(rng.gen_range_inclusive(min, max)))
            .collect();

        Self {
            size,
            remaining: cells.len(),
            cells,
        }
    }

    /// Side length of the board.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells not yet taken.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Check if a move lies within the board.
    #[inline]
    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        mv.row < self.size && mv.col < self.size
    }

    /// Get a cell, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        if self.contains(mv) {
            self.cells.get(self.index(mv)).copied()
        } else {
            None
        }
    }

    /// Get the value of an untaken cell, or `None` if taken or out of bounds.
    #[inline]
    #[must_use]
    pub fn value(&self, mv: Move) -> Option<u32> {
        self.cell(mv).and_then(Cell::value)
    }

    /// Check if a cell can still be taken.
    #[inline]
    #[must_use]
    pub fn is_available(&self, mv: Move) -> bool {
        self.value(mv).is_some()
    }

    /// Take a cell, returning its value.
    ///
    /// Returns `None` (and leaves the board untouched) if the cell is
    /// out of bounds or already taken.
    pub fn take(&mut self, mv: Move) -> Option<u32> {
        let value = self.value(mv)?;
        let idx = self.index(mv);
        self.cells.set(idx, Cell::Consumed);
        self.remaining -= 1;
        Some(value)
    }

    /// Iterate over the cells of a row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let start = row * self.size;
        (0..self.size).filter_map(move |c| self.cells.get(start + c).copied())
    }

    /// Iterate over the cells of a column.
    pub fn col(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).filter_map(move |r| self.cells.get(r * self.size + col).copied())
    }

    /// Iterate over every (move, cell) pair in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Move::new(i / size, i % size), cell))
    }

    /// Sum of all untaken cell values.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.cells
            .iter()
            .filter_map(|c| c.value())
            .map(u64::from)
            .sum()
    }

    #[inline]
    fn index(&self, mv: Move) -> usize {
        mv.row * self.size + mv.col
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::from_cells(rows)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        (0..board.size).map(|r| board.row(r).collect()).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.size {
            let line: Vec<String> = self.row(r).map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x3() -> Board {
        Board::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_from_rows() {
        let board = board_3x3();
        assert_eq!(board.size(), 3);
        assert_eq!(board.remaining(), 9);
        assert_eq!(board.value(Move::new(1, 2)), Some(6));
        assert_eq!(board.total_value(), 45);
    }

    #[test]
    fn test_serde_keeps_consumed_cells() {
        let mut board = board_3x3();
        board.take(Move::new(1, 1));

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
        assert_eq!(restored.remaining(), 8);
        assert!(!restored.is_available(Move::new(1, 1)));
    }

    #[test]
    fn test_serde_rejects_malformed_boards() {
        // Ragged rows
        let ragged = r#"[[{"Value":3},{"Value":1}],[{"Value":2}]]"#;
        assert!(serde_json::from_str::<Board>(ragged).is_err());
        // Zero value
        assert!(serde_json::from_str::<Board>(r#"[[{"Value":0}]]"#).is_err());
        // Empty
        assert!(serde_json::from_str::<Board>("[]").is_err());
        // Raw fields are not accepted, so `remaining` cannot disagree with the cells
        assert!(serde_json::from_str::<Board>(
            r#"{"size":2,"cells":[{"Value":1},{"Value":2},{"Value":3}],"remaining":0}"#
        )
        .is_err());
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert!(matches!(Board::from_rows(vec![]), Err(BoardError::Empty)));
        assert!(matches!(
            Board::from_rows(vec![vec![1, 2], vec![3]]),
            Err(BoardError::InconsistentRow {
                row: 1,
                expected: 2,
                found: 1,
            })
        ));
        assert!(matches!(
            Board::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]),
            Err(BoardError::NotSquare { rows: 2, cols: 3 })
        ));
        assert!(matches!(
            Board::from_rows(vec![vec![1, 0], vec![3, 4]]),
            Err(BoardError::NonPositive {
                row: 0,
                col: 1,
                value: 0,
            })
        ));
    }

    #[test]
    fn test_take() {
        let mut board = board_3x3();
        assert_eq!(board.take(Move::new(0, 0)), Some(1));
        assert_eq!(board.cell(Move::new(0, 0)), Some(Cell::Consumed));
        assert_eq!(board.remaining(), 8);

        // Second take of the same cell is refused
        assert_eq!(board.take(Move::new(0, 0)), None);
        assert_eq!(board.remaining(), 8);

        // Out of bounds
        assert_eq!(board.take(Move::new(3, 0)), None);
        assert_eq!(board.cell(Move::new(0, 3)), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = board_3x3();
        let mut child = board.clone();
        child.take(Move::new(2, 2));

        assert!(board.is_available(Move::new(2, 2)));
        assert!(!child.is_available(Move::new(2, 2)));
    }

    #[test]
    fn test_row_and_col() {
        let board = board_3x3();
        let row: Vec<_> = board.row(1).filter_map(Cell::value).collect();
        let col: Vec<_> = board.col(2).filter_map(Cell::value).collect();
        assert_eq!(row, vec![4, 5, 6]);
        assert_eq!(col, vec![3, 6, 9]);
    }

    #[test]
    fn test_cells_row_major() {
        let board = board_3x3();
        let moves: Vec<_> = board.cells().map(|(m, _)| m).take(4).collect();
        assert_eq!(
            moves,
            vec![Move::new(0, 0), Move::new(0, 1), Move::new(0, 2), Move::new(1, 0)]
        );
    }

    #[test]
    fn test_random_board_in_range() {
        let mut rng = GameRng::new(7);
        let board = Board::random(5, 1, 9, &mut rng);
        assert_eq!(board.size(), 5);
        assert_eq!(board.remaining(), 25);
        assert!(board.cells().all(|(_, c)| matches!(c, Cell::Value(v) if (1..=9).contains(&v))));
    }

    #[test]
    fn test_random_board_deterministic() {
        let a = Board::random(4, 1, 9, &mut GameRng::new(99));
        let b = Board::random(4, 1, 9, &mut GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let mut board = Board::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        board.take(Move::new(0, 1));
        assert_eq!(board.to_string(), "1,-\n3,4\n");
    }

    #[test]
    fn test_move_alignment() {
        let m = Move::new(1, 2);
        assert!(m.is_aligned_with(Move::new(1, 0)));
        assert!(m.is_aligned_with(Move::new(0, 2)));
        assert!(!m.is_aligned_with(Move::new(0, 0)));
        assert_eq!(Move::from((1, 2)), m);
        assert_eq!(m.to_string(), "(1, 2)");
    }
}
