//! Core types: board, moves, seats, scores, players, RNG, errors.
//!
//! Everything here is plain data. Game rules live in `rules`.

pub mod board;
pub mod error;
pub mod player;
pub mod rng;

pub use board::{Board, Cell, Move};
pub use error::{BoardError, ConfigError, GameError, SimError};
pub use player::{Player, PlayerKind, Scores, Seat};
pub use rng::GameRng;
