//! The legality oracle.
//!
//! One rule, shared by every consumer (engine, strategies, searches,
//! external drivers):
//!
//! - No previous move: every untaken cell is legal.
//! - Otherwise: the untaken cells in the previous move's row or column.
//!
//! Moves are always enumerated in row-major order, which keeps random
//! choices and tie-breaks reproducible.

use smallvec::SmallVec;

use crate::core::{Board, Move};

/// Legal move list. Inline storage covers a full row plus column on
/// boards up to 8×8 without allocating.
pub type MoveList = SmallVec<[Move; 16]>;

/// Enumerate the moves available after `last_move`.
///
/// An empty list means the player to move is stuck and the game is over.
#[must_use]
pub fn legal_moves(board: &Board, last_move: Option<Move>) -> MoveList {
    let mut moves = MoveList::new();

    let Some(last) = last_move else {
        moves.extend(
            board
                .cells()
                .filter(|(_, cell)| !cell.is_consumed())
                .map(|(mv, _)| mv),
        );
        return moves;
    };

    let size = board.size();
    let mut push_if_available = |mv: Move| {
        if board.is_available(mv) {
            moves.push(mv);
        }
    };

    // Column cells above the row, the row itself, then column cells below.
    // The intersection is visited once, as part of the row.
    for r in 0..last.row.min(size) {
        push_if_available(Move::new(r, last.col));
    }
    for c in 0..size {
        push_if_available(Move::new(last.row, c));
    }
    for r in (last.row + 1)..size {
        push_if_available(Move::new(r, last.col));
    }

    moves
}

/// Check a single move without building the full list.
#[must_use]
pub fn is_legal(board: &Board, last_move: Option<Move>, mv: Move) -> bool {
    board.is_available(mv) && last_move.map_or(true, |last| mv.is_aligned_with(last))
}

/// Check if any legal move exists.
#[must_use]
pub fn has_legal_move(board: &Board, last_move: Option<Move>) -> bool {
    match last_move {
        None => board.remaining() > 0,
        Some(last) => {
            let size = board.size();
            (0..size).any(|i| {
                board.is_available(Move::new(last.row, i))
                    || board.is_available(Move::new(i, last.col))
            })
        }
    }
}
