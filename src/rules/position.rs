//! Position: everything needed to choose and apply the next move.
//!
//! A `Position` is the board, the previous move, the score pair and the
//! seat to move. Strategies receive one per decision; searches clone it
//! per explored child (cheap, the board is persistent).

use serde::{Deserialize, Serialize};

use crate::core::{Board, Move, Scores, Seat};

use super::legality::{self, MoveList};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Seat),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &Scores) -> Self {
        match scores.leader() {
            Some(seat) => GameResult::Winner(seat),
            None => GameResult::Draw,
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }

    /// Reward for a seat: 1 for a win, 0.5 for a draw, 0 for a loss.
    #[must_use]
    pub fn reward(&self, seat: Seat) -> f64 {
        match self {
            GameResult::Winner(s) if *s == seat => 1.0,
            GameResult::Winner(_) => 0.0,
            GameResult::Draw => 0.5,
        }
    }
}

/// A game position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    board: Board,
    last_move: Option<Move>,
    scores: Scores,
    to_move: Seat,
}

impl Position {
    /// Start-of-game position: no previous move, zero scores, first seat to move.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            last_move: None,
            scores: Scores::new(),
            to_move: Seat::First,
        }
    }

    /// Build a position from explicit parts.
    ///
    /// Used by external drivers and tests that set up mid-game positions.
    #[must_use]
    pub fn from_parts(
        board: Board,
        last_move: Option<Move>,
        scores: Scores,
        to_move: Seat,
    ) -> Self {
        Self {
            board,
            last_move,
            scores,
            to_move,
        }
    }

    /// The board.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The previous move, `None` before the opening move.
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Current scores.
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Seat whose turn it is.
    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    /// Moves available to the seat to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        legality::legal_moves(&self.board, self.last_move)
    }

    /// Check a single move.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        legality::is_legal(&self.board, self.last_move, mv)
    }

    /// Check if the seat to move is stuck.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !legality::has_legal_move(&self.board, self.last_move)
    }

    /// The final result, once terminal.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        if self.is_terminal() {
            Some(GameResult::from_scores(&self.scores))
        } else {
            None
        }
    }

    /// Play a move for the seat to move.
    ///
    /// Credits the cell's value, consumes the cell, records the move and
    /// passes the turn. Returns the value taken, or `None` (position
    /// unchanged) if the move is illegal.
    pub fn apply(&mut self, mv: Move) -> Option<u32> {
        if !self.is_legal(mv) {
            return None;
        }
        let value = self.board.take(mv)?;
        self.scores.add(self.to_move, value);
        self.last_move = Some(mv);
        self.to_move = self.to_move.other();
        Some(value)
    }

    /// The position after `mv`, leaving `self` untouched.
    #[must_use]
    pub fn child(&self, mv: Move) -> Option<Position> {
        let mut next = self.clone();
        next.apply(mv).map(|_| next)
    }
}
