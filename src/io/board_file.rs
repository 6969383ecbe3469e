//! Board files: one row per line, values separated by commas.
//!
//! ```text
//! 3, 7, 2
//! 5, 5, 1
//!
//! 8, 4, 6
//! ```
//!
//! Blank lines are ignored and whitespace around values is trimmed.

use std::path::Path;

use crate::core::{Board, BoardError};

/// Parse board text.
pub fn parse_board(text: &str) -> Result<Board, BoardError> {
    let mut rows: Vec<Vec<u32>> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row_index = rows.len();
        let mut row = Vec::new();
        for (col, field) in line.split(',').enumerate() {
            let field = field.trim();
            let value: i64 = field.parse().map_err(|_| BoardError::NonNumeric {
                line: line_no + 1,
                text: field.to_string(),
            })?;
            let value = u32::try_from(value)
                .ok()
                .filter(|&v| v > 0)
                .ok_or(BoardError::NonPositive {
                    row: row_index,
                    col,
                    value,
                })?;
            row.push(value);
        }
        rows.push(row);
    }

    Board::from_rows(rows)
}

/// Read and parse a board file.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board, BoardError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| BoardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_board(&text)
}
