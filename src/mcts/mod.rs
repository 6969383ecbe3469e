//! Monte Carlo Tree Search.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes live in a flat `Vec` and refer to each other by
//!   `NodeId`, so a search allocates nothing per edge beyond the arena.
//! - **Both seats expanded**: the game has perfect information; each node
//!   holds one edge per legal move of the seat to move.
//! - **Configurable policies**: selection (UCB1) and rollout (random, greedy).
//! - **Serializable**: tree and config can be saved/loaded.
//!
//! ## Usage
//!
//! ```rust
//! use rowcol::core::Board;
//! use rowcol::mcts::{MCTSConfig, MCTSSearch};
//! use rowcol::rules::Position;
//!
//! let board = Board::from_rows(vec![vec![3, 7, 2], vec![5, 5, 1], vec![8, 4, 6]]).unwrap();
//! let position = Position::new(board);
//!
//! let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(200).with_seed(1));
//! let mv = search.search(&position).unwrap();
//! assert!(position.is_legal(mv));
//!
//! for (mv, share) in search.move_probabilities() {
//!     println!("{mv}: {:.1}%", share * 100.0);
//! }
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod strategy;
pub mod tree;

pub use config::{MCTSConfig, RolloutKind};
pub use node::{Edge, MCTSNode, NodeId};
pub use policy::{GreedyRollout, RandomRollout, SelectionPolicy, SimulationPolicy, UCB1};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use strategy::MCTSStrategy;
pub use tree::{MCTSTree, TreeStats};
