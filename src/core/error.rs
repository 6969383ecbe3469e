//! Error types.
//!
//! - `BoardError`: malformed board input, rejected before a game starts
//! - `GameError`: a move that breaks the rules, fatal for the current game
//! - `ConfigError`: bad strategy names or simulation settings
//! - `SimError`: a simulation run aborted, with the game that caused it

use std::path::PathBuf;

use thiserror::Error;

use super::board::Move;
use super::player::Seat;

/// Malformed board input.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("the board is empty")]
    Empty,

    #[error("non-numeric value '{text}' on line {line}")]
    NonNumeric { line: usize, text: String },

    #[error("row {row} has {found} values, expected {expected}")]
    InconsistentRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board is not square: {rows} rows of {cols} values")]
    NotSquare { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) has non-positive value {value}")]
    NonPositive { row: usize, col: usize, value: i64 },

    #[error("could not read board file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A rule violation during play.
///
/// Never repaired: the game that raised it is aborted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{strategy} ({seat}) played illegal move {mv}")]
    IllegalMove {
        strategy: String,
        seat: Seat,
        mv: Move,
    },

    #[error("{strategy} ({seat}) returned no move while legal moves remain")]
    MissingMove { strategy: String, seat: Seat },

    #[error("{seat} is human and cannot be auto-played")]
    NoStrategy { seat: Seat },

    #[error("the game is already over")]
    GameOver,
}

/// Invalid configuration, raised before any simulation work begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown strategy '{0}' (expected Random, Greedy, SafeChoice, MCTS or Minimax)")]
    UnknownStrategy(String),

    #[error("strategy {0} is listed more than once")]
    DuplicateStrategy(String),

    #[error("at least two strategies are required, got {0}")]
    TooFewStrategies(usize),

    #[error("no board sizes configured")]
    NoBoardSizes,

    #[error("board size must be at least 1")]
    ZeroBoardSize,

    #[error("boards per size must be at least 1")]
    ZeroBoards,

    #[error("invalid cell value range {min}..={max}")]
    ValueRange { min: u32, max: u32 },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A simulation run failed.
#[derive(Debug, Error)]
pub enum SimError {
    /// A game aborted; the whole run is abandoned so no statistic is skewed.
    #[error("size {size}, board {board}: {first} vs {second}: {source}")]
    Game {
        size: usize,
        board: usize,
        first: String,
        second: String,
        #[source]
        source: GameError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not write results: {0}")]
    Csv(#[from] csv::Error),

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
