//! Alpha-beta search ("Minimax" in configuration).
//!
//! Negamax over the score still to be earned: a node's value is the best
//! `cell value - value of the reply position` for the seat to move. Terminal
//! positions and the depth horizon are worth 0, so the root value is the
//! mover's expected lead over the rest of the game (or the searched window).
//!
//! Children are visited in descending cell value, stable on legal-move
//! order, which makes cutoffs early and keeps the search deterministic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::Move;
use crate::rules::Position;

use super::Strategy;

const INF: i64 = i64::MAX / 4;

/// Search limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaBetaConfig {
    /// Plies searched when the board is still large.
    pub max_depth: u32,
    /// Search to the end of the game once at most this many cells remain.
    pub exhaustive_below: usize,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            exhaustive_below: 10,
        }
    }
}

impl AlphaBetaConfig {
    /// Set the depth limit.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the exhaustive-search threshold.
    pub fn with_exhaustive_below(mut self, cells: usize) -> Self {
        self.exhaustive_below = cells;
        self
    }

    /// Depth to search from a position with `remaining` untaken cells.
    #[must_use]
    pub fn depth_for(&self, remaining: usize) -> u32 {
        if remaining <= self.exhaustive_below {
            u32::try_from(remaining).unwrap_or(u32::MAX)
        } else {
            self.max_depth.max(1)
        }
    }
}

/// Outcome of one root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen move.
    pub best: Move,
    /// Negamax value of the chosen move.
    pub value: i64,
    /// Nodes visited, root included.
    pub nodes: u64,
    /// Depth used.
    pub depth: u32,
}

/// Depth-limited negamax with alpha-beta pruning.
#[derive(Clone, Debug, Default)]
pub struct AlphaBetaStrategy {
    config: AlphaBetaConfig,
    nodes: u64,
}

impl AlphaBetaStrategy {
    /// Create with the given limits.
    #[must_use]
    pub fn new(config: AlphaBetaConfig) -> Self {
        Self { config, nodes: 0 }
    }

    /// Search limits in use.
    #[must_use]
    pub fn config(&self) -> &AlphaBetaConfig {
        &self.config
    }

    /// Run a full root search, or `None` if there is no legal move.
    pub fn search(&mut self, position: &Position) -> Option<SearchOutcome> {
        self.nodes = 1;
        let depth = self.config.depth_for(position.board().remaining());
        let moves = ordered_moves(position);

        let mut best: Option<(Move, i64)> = None;
        let mut alpha = -INF;
        for (mv, value) in moves {
            let mut child = position.clone();
            child.apply(mv);
            let value = i64::from(value);
            // score = value - reply, so the reply window is shifted by value
            let score = value - self.negamax(&child, depth - 1, value - INF, value - alpha);
            // Strict improvement keeps the first move on ties
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((mv, score));
                alpha = alpha.max(score);
            }
        }

        let (best, value) = best?;
        trace!(%best, value, nodes = self.nodes, depth, "alpha-beta search");
        Some(SearchOutcome {
            best,
            value,
            nodes: self.nodes,
            depth,
        })
    }

    fn negamax(&mut self, position: &Position, depth: u32, mut alpha: i64, beta: i64) -> i64 {
        self.nodes += 1;
        if depth == 0 {
            return 0;
        }

        let moves = ordered_moves(position);
        if moves.is_empty() {
            return 0;
        }

        let mut best = -INF;
        for (mv, value) in moves {
            let mut child = position.clone();
            child.apply(mv);
            let value = i64::from(value);
            let score = value - self.negamax(&child, depth - 1, value - beta, value - alpha);
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

/// Legal moves paired with their values, highest value first.
fn ordered_moves(position: &Position) -> SmallVec<[(Move, u32); 16]> {
    let board = position.board();
    let mut moves: SmallVec<[(Move, u32); 16]> = position
        .legal_moves()
        .into_iter()
        .filter_map(|mv| board.value(mv).map(|v| (mv, v)))
        .collect();
    // sort_by is stable
    moves.sort_by(|a, b| b.1.cmp(&a.1));
    moves
}

impl Strategy for AlphaBetaStrategy {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, position: &Position) -> Option<Move> {
        self.search(position).map(|outcome| outcome.best)
    }
}
