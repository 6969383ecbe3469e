//! # rowcol
//!
//! Engine, strategies and simulation harness for the Row-Column game.
//!
//! Two players alternately take cells from an N×N board of positive values.
//! After the first move, each move must come from the row or the column of
//! the previous move. A taken cell scores its value for the mover and leaves
//! the board. The game ends when the player to move has no legal cell; the
//! higher score wins.
//!
//! ## Design Principles
//!
//! 1. **One Legality Oracle**: `rules::legal_moves` is the only place the
//!    row/column rule is written. The engine, the strategies and the search
//!    trees all call it.
//!
//! 2. **Strategies Never Get Repaired**: a strategy answering with an illegal
//!    move aborts its game with a `GameError`. Simulation statistics are only
//!    computed from games played by the rules.
//!
//! 3. **Explicit Randomness**: every random draw comes from a seeded
//!    `GameRng`, so simulation runs reproduce exactly, in parallel or not.
//!
//! ## Architecture
//!
//! - **Persistent Boards**: O(1) cloning via `im` for search.
//!
//! - **Paired Matches**: each matchup plays every shared board twice, once
//!   per seating, removing board and seat luck from comparisons.
//!
//! ## Modules
//!
//! - `core`: board, moves, seats, scores, players, RNG, errors
//! - `rules`: legality, positions, the turn state machine
//! - `strategy`: the `Strategy` trait and Random, Greedy, SafeChoice, alpha-beta
//! - `mcts`: Monte Carlo Tree Search
//! - `sim`: board sets, paired matchups, sweeps and CSV export
//! - `io`: board files

pub mod core;
pub mod io;
pub mod mcts;
pub mod rules;
pub mod sim;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, Cell, ConfigError, GameError, GameRng, Move, Player, PlayerKind, Scores,
    Seat, SimError,
};

pub use crate::rules::{legal_moves, Game, GamePhase, GameResult, GameSummary, MoveRecord, Position};

pub use crate::strategy::{
    AlphaBetaConfig, AlphaBetaStrategy, GreedyStrategy, RandomStrategy, SafeChoiceStrategy,
    Strategy, StrategyKind, StrategySettings,
};

pub use crate::mcts::{MCTSConfig, MCTSSearch, MCTSStrategy, RolloutKind, SearchStats, TreeStats};

pub use crate::sim::{
    required_sample_size, write_csv, write_csv_path, BoardSet, MatchTally, MatchupResult,
    SimulationConfig, SimulationRunner,
};

pub use crate::io::{load_board, parse_board};
