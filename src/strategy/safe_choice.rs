//! SafeChoice: greedy on value, with a parity look-ahead for ties.
//!
//! Each candidate `(i, j)` with value `v` is scored `(v, a, b)`:
//!
//! - `a`: +1 if the row's maximum, once `(i, j)` is taken, occurs an even
//!   number of times (zero counts as even), -1 if odd.
//! - `b`: the same along the column.
//!
//! Selection order:
//!
//! 1. highest `v`
//! 2. most of `a`, `b` equal to +1
//! 3. `a = +1` before `a = -1`, then `b = +1` before `b = -1`
//! 4. bottom-right-most cell (largest row, then largest column)

use crate::core::{Board, Cell, Move};
use crate::rules::Position;

use super::Strategy;

/// Top two distinct values of a line, with multiplicities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineSummary {
    /// Largest value and how often it occurs.
    pub top: Option<(u32, usize)>,
    /// Second-largest distinct value and how often it occurs.
    pub second: Option<(u32, usize)>,
}

impl LineSummary {
    /// Summarise the untaken cells of a line.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut summary = Self::default();
        for value in cells.into_iter().filter_map(Cell::value) {
            summary.push(value);
        }
        summary
    }

    fn push(&mut self, value: u32) {
        match (self.top, self.second) {
            (None, _) => self.top = Some((value, 1)),
            (Some((t, n)), _) if value == t => self.top = Some((t, n + 1)),
            (Some(top), _) if value > top.0 => {
                self.second = Some(top);
                self.top = Some((value, 1));
            }
            (Some(_), Some((s, n))) if value == s => self.second = Some((s, n + 1)),
            (Some(_), Some((s, _))) if value < s => {}
            // value sits strictly between second and top, or there is no second yet
            (Some(_), _) => self.second = Some((value, 1)),
        }
    }

    /// Multiplicity of the line's maximum after removing one cell of `value`.
    ///
    /// `value` must belong to the line.
    #[must_use]
    pub fn top_count_without(&self, value: u32) -> usize {
        match self.top {
            None => 0,
            Some((t, n)) if value == t && n > 1 => n - 1,
            // Removing the unique maximum promotes the second value
            Some((t, _)) if value == t => self.second.map_or(0, |(_, n)| n),
            Some((_, n)) => n,
        }
    }

    /// +1 if the remaining maximum count is even, -1 if odd.
    #[must_use]
    pub fn parity_without(&self, value: u32) -> i8 {
        if self.top_count_without(value) % 2 == 0 {
            1
        } else {
            -1
        }
    }
}

/// Score of one candidate cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SafetyScore {
    /// Cell value.
    pub value: u32,
    /// Row parity.
    pub a: i8,
    /// Column parity.
    pub b: i8,
}

impl SafetyScore {
    /// Ordering key, larger is better. Position breaks the final tie.
    fn key(&self, mv: Move) -> (u32, u8, i8, i8, usize, usize) {
        let ones = u8::from(self.a == 1) + u8::from(self.b == 1);
        (self.value, ones, self.a, self.b, mv.row, mv.col)
    }
}

/// Value-first strategy with parity tie-breaks.
#[derive(Clone, Copy, Debug, Default)]
pub struct SafeChoiceStrategy;

impl SafeChoiceStrategy {
    /// Create a SafeChoice strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Score a cell on `board`, or `None` if it is not available.
    #[must_use]
    pub fn score(board: &Board, mv: Move) -> Option<SafetyScore> {
        let value = board.value(mv)?;
        let a = LineSummary::from_cells(board.row(mv.row)).parity_without(value);
        let b = LineSummary::from_cells(board.col(mv.col)).parity_without(value);
        Some(SafetyScore { value, a, b })
    }
}

impl Strategy for SafeChoiceStrategy {
    fn name(&self) -> &str {
        "SafeChoice"
    }

    fn choose_move(&mut self, position: &Position) -> Option<Move> {
        let board = position.board();
        let moves = position.legal_moves();

        // Parities only matter among the top-valued candidates.
        let best_value = moves.iter().filter_map(|&mv| board.value(mv)).max()?;

        moves
            .into_iter()
            .filter(|&mv| board.value(mv) == Some(best_value))
            .filter_map(|mv| Self::score(board, mv).map(|s| (mv, s)))
            .max_by_key(|(mv, s)| s.key(*mv))
            .map(|(mv, _)| mv)
    }
}
