//! Search tree nodes.
//!
//! A node stands for one position. Its edges are the legal cells of that
//! position in oracle order; the child behind an edge is created the first
//! time the edge is tried.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Move, Seat};
use crate::rules::{GameResult, Position};

use super::policy::result_to_rewards;

/// Index into the tree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// The root always sits in slot 0.
    pub const ROOT: NodeId = NodeId(0);

    /// Marks an edge whose child does not exist yet.
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub(crate) fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Arena slot.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check for the `NONE` marker.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// One candidate cell and the statistics of the games that went through it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    /// The cell taken.
    pub mv: Move,

    /// Child node, `NodeId::NONE` until tried.
    pub child: NodeId,

    /// Games played through this cell.
    pub visits: u32,

    /// Reward sums indexed by seat.
    pub reward: [f64; 2],
}

impl Edge {
    /// An untried edge.
    pub fn new(mv: Move) -> Self {
        Self {
            mv,
            child: NodeId::NONE,
            visits: 0,
            reward: [0.0; 2],
        }
    }

    /// Mean reward for `seat`; 0 before the first visit.
    #[must_use]
    pub fn mean_reward(&self, seat: Seat) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward[seat.index()] / f64::from(self.visits)
        }
    }

    /// Check if the child exists.
    #[must_use]
    pub fn is_tried(&self) -> bool {
        !self.child.is_none()
    }

    /// Count one playout ending in `rewards`.
    pub fn record(&mut self, rewards: [f64; 2]) {
        self.visits += 1;
        self.reward[0] += rewards[0];
        self.reward[1] += rewards[1];
    }
}

/// A position in the search tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSNode {
    /// Seat choosing among `edges`.
    pub to_move: Seat,

    /// Plies below the root.
    pub depth: u16,

    /// Playouts through this node.
    pub visits: u32,

    /// Final result, set when the seat to move is stranded.
    pub outcome: Option<GameResult>,

    /// One edge per legal cell.
    /// A row plus a column holds at most 2N - 2 candidates.
    pub edges: SmallVec<[Edge; 16]>,
}

impl MCTSNode {
    /// A node with no edges yet.
    pub fn empty(to_move: Seat, depth: u16) -> Self {
        Self {
            to_move,
            depth,
            visits: 0,
            outcome: None,
            edges: SmallVec::new(),
        }
    }

    /// A node with one edge per legal cell of `position`.
    pub fn for_position(position: &Position, depth: u16) -> Self {
        let mut node = Self::empty(position.to_move(), depth);
        node.edges.extend(position.legal_moves().into_iter().map(Edge::new));
        if node.edges.is_empty() {
            node.outcome = position.outcome();
        }
        node
    }

    /// Check if the game is over here.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Rewards by seat if the game is over here.
    #[must_use]
    pub fn terminal_rewards(&self) -> Option<[f64; 2]> {
        self.outcome.as_ref().map(result_to_rewards)
    }

    /// Check if some edge has no child yet.
    #[must_use]
    pub fn has_untried(&self) -> bool {
        self.edges.iter().any(|e| !e.is_tried())
    }

    /// Indices of the edges without a child.
    pub fn untried(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_tried())
            .map(|(i, _)| i)
    }

    /// The edge with the most visits; the earliest edge wins ties.
    #[must_use]
    pub fn most_visited(&self) -> Option<&Edge> {
        self.edges.iter().rev().max_by_key(|e| e.visits)
    }

    /// The edge with the best mean reward for `seat`; the earliest edge wins ties.
    #[must_use]
    pub fn best_for(&self, seat: Seat) -> Option<&Edge> {
        self.edges
            .iter()
            .rev()
            .max_by(|a, b| a.mean_reward(seat).total_cmp(&b.mean_reward(seat)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Scores};

    fn node_with(visits: &[(u32, [f64; 2])]) -> MCTSNode {
        let mut node = MCTSNode::empty(Seat::First, 0);
        for (col, &(v, reward)) in visits.iter().enumerate() {
            let mut edge = Edge::new(Move::new(0, col));
            edge.visits = v;
            edge.reward = reward;
            node.edges.push(edge);
        }
        node
    }

    #[test]
    fn test_node_id() {
        assert_eq!(NodeId::ROOT.index(), 0);
        assert_eq!(NodeId::from_index(7).index(), 7);
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId::ROOT.is_none());
    }

    #[test]
    fn test_edge_record() {
        let mut edge = Edge::new(Move::new(1, 2));
        assert!(!edge.is_tried());
        assert_eq!(edge.mean_reward(Seat::First), 0.0);

        edge.record([1.0, 0.0]);
        edge.record([0.5, 0.5]);
        edge.record([0.0, 1.0]);
        edge.record([1.0, 0.0]);

        assert_eq!(edge.visits, 4);
        assert_eq!(edge.mean_reward(Seat::First), 0.625);
        assert_eq!(edge.mean_reward(Seat::Second), 0.375);
    }

    #[test]
    fn test_for_position_opening() {
        let board = Board::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let node = MCTSNode::for_position(&Position::new(board), 0);

        assert_eq!(node.to_move, Seat::First);
        assert_eq!(node.edges.len(), 4);
        assert!(!node.is_terminal());
        assert!(node.has_untried());
        assert_eq!(node.untried().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_for_position_stranded() {
        let board = Board::from_rows(vec![vec![5]]).unwrap();
        let mut position =
            Position::from_parts(board, None, Scores::from_values(0, 3), Seat::First);
        position.apply(Move::new(0, 0));

        let node = MCTSNode::for_position(&position, 1);
        assert_eq!(node.to_move, Seat::Second);
        assert!(node.is_terminal());
        // 5 against 3
        assert_eq!(node.terminal_rewards(), Some([1.0, 0.0]));
        assert!(!node.has_untried());
    }

    #[test]
    fn test_untried_skips_children() {
        let mut node = node_with(&[(0, [0.0; 2]); 3]);
        node.edges[1].child = NodeId::from_index(10);
        assert_eq!(node.untried().collect::<Vec<_>>(), vec![0, 2]);

        node.edges[0].child = NodeId::from_index(11);
        node.edges[2].child = NodeId::from_index(12);
        assert!(!node.has_untried());
    }

    #[test]
    fn test_best_edges() {
        let node = node_with(&[(10, [5.0, 5.0]), (20, [8.0, 12.0])]);

        assert_eq!(node.most_visited().unwrap().mv, Move::new(0, 1));
        // 0.5 against 0.4
        assert_eq!(node.best_for(Seat::First).unwrap().mv, Move::new(0, 0));
        assert_eq!(node.best_for(Seat::Second).unwrap().mv, Move::new(0, 1));
    }

    #[test]
    fn test_best_edges_ties_keep_first() {
        let node = node_with(&[(7, [3.0, 4.0]); 3]);
        assert_eq!(node.most_visited().unwrap().mv, Move::new(0, 0));
        assert_eq!(node.best_for(Seat::Second).unwrap().mv, Move::new(0, 0));
    }

    #[test]
    fn test_serialization() {
        let board = Board::from_rows(vec![vec![2, 2], vec![2, 2]]).unwrap();
        let mut node = MCTSNode::for_position(&Position::new(board), 0);
        node.visits = 100;
        node.edges[3].record([0.5, 0.5]);

        let json = serde_json::to_string(&node).unwrap();
        let restored: MCTSNode = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.visits, 100);
        assert_eq!(restored.edges.len(), 4);
        assert_eq!(restored.edges[3].visits, 1);
    }
}
