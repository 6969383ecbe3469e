//! Game engine: the turn state machine.
//!
//! States:
//! - `AwaitingMove(seat)`: `seat` has at least one legal move
//! - `Terminal`: the seat to move has none
//!
//! Each applied move credits the mover, consumes the cell, records the
//! move and passes the turn. A strategy that answers with an illegal move
//! (or no move while one exists) aborts the game with a `GameError`.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Board, GameError, Move, Player, Scores, Seat};

use super::legality::MoveList;
use super::position::{GameResult, Position};

/// Engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for this seat to move.
    AwaitingMove(Seat),
    /// No legal move remains for the seat to move.
    Terminal,
}

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Seat that moved.
    pub seat: Seat,
    /// The cell taken.
    pub mv: Move,
    /// Value credited.
    pub value: u32,
    /// 0-based ply number.
    pub ply: usize,
}

/// Final state of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Final scores.
    pub scores: Scores,
    /// Winner or draw.
    pub result: GameResult,
    /// Every move in order.
    pub history: Vec<MoveRecord>,
}

impl GameSummary {
    /// Number of moves played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.history.len()
    }
}

/// A single game between two players.
#[derive(Debug)]
pub struct Game {
    position: Position,
    players: [Player; 2],
    history: Vec<MoveRecord>,
}

impl Game {
    /// Create a game on `board`; `first` moves first.
    pub fn new(board: Board, first: Player, second: Player) -> Self {
        Self::from_position(Position::new(board), first, second)
    }

    /// Resume from an arbitrary position.
    pub fn from_position(position: Position, first: Player, second: Player) -> Self {
        Self {
            position,
            players: [first, second],
            history: Vec::new(),
        }
    }

    /// Current engine state.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.position.is_terminal() {
            GamePhase::Terminal
        } else {
            GamePhase::AwaitingMove(self.position.to_move())
        }
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Player in a seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Moves applied so far.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Moves available to the seat to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    /// The result, once terminal.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.position.outcome()
    }

    /// Apply a move for the seat to move.
    ///
    /// This is the entry point for externally supplied moves (human input).
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveRecord, GameError> {
        let seat = match self.phase() {
            GamePhase::Terminal => return Err(GameError::GameOver),
            GamePhase::AwaitingMove(seat) => seat,
        };

        let ply = self.history.len();
        let value = self.position.apply(mv).ok_or_else(|| GameError::IllegalMove {
            strategy: self.players[seat.index()].name().to_string(),
            seat,
            mv,
        })?;

        let record = MoveRecord { seat, mv, value, ply };
        debug!(%seat, %mv, value, scores = %self.position.scores(), "move applied");
        self.history.push(record);
        Ok(record)
    }

    /// Let the automated player to move take one turn.
    ///
    /// Returns `Ok(None)` once the game is over.
    pub fn step(&mut self) -> Result<Option<MoveRecord>, GameError> {
        let seat = match self.phase() {
            GamePhase::Terminal => return Ok(None),
            GamePhase::AwaitingMove(seat) => seat,
        };

        let strategy = self.players[seat.index()]
            .strategy_mut()
            .ok_or(GameError::NoStrategy { seat })?;

        let choice = strategy.choose_move(&self.position);
        let mv = choice.ok_or_else(|| GameError::MissingMove {
            strategy: strategy.name().to_string(),
            seat,
        })?;

        if !self.position.is_legal(mv) {
            return Err(GameError::IllegalMove {
                strategy: strategy.name().to_string(),
                seat,
                mv,
            });
        }

        self.apply_move(mv).map(Some)
    }

    /// Play automated turns until the game ends.
    ///
    /// Terminates after at most N² moves: every move consumes a cell.
    #[instrument(level = "debug", skip(self), fields(
        first = self.players[0].name(),
        second = self.players[1].name(),
        size = self.position.board().size(),
    ))]
    pub fn run(mut self) -> Result<GameSummary, GameError> {
        while self.step()?.is_some() {}

        let scores = *self.position.scores();
        let result = GameResult::from_scores(&scores);
        debug!(%scores, ?result, plies = self.history.len(), "game finished");

        Ok(GameSummary {
            scores,
            result,
            history: self.history,
        })
    }
}
