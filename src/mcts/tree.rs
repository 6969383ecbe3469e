//! Arena holding the nodes of one search.
//!
//! Nodes live in a flat `Vec` and point at their children through `NodeId`
//! indices stored on the edges. The root is slot 0. The arena is cleared,
//! not freed, between decisions.

use serde::{Deserialize, Serialize};

use super::node::{MCTSNode, NodeId};
use crate::core::Seat;
use crate::rules::Position;

/// The search tree of one decision.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSTree {
    nodes: Vec<MCTSNode>,
}

impl MCTSTree {
    /// A tree holding an empty root for `to_move`.
    pub fn new(to_move: Seat) -> Self {
        Self::with_capacity(to_move, 1024)
    }

    /// Same as `new`, reserving room for `capacity` nodes.
    pub fn with_capacity(to_move: Seat, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::empty(to_move, 0));
        Self { nodes }
    }

    /// Drop every node and root the tree at `position`.
    pub fn reset(&mut self, position: &Position) {
        self.nodes.clear();
        self.nodes.push(MCTSNode::for_position(position, 0));
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.index()]
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &MCTSNode {
        self.get(NodeId::ROOT)
    }

    /// Store `child` as the target of `parent`'s edge `edge_idx`.
    pub fn attach(&mut self, parent: NodeId, edge_idx: usize, child: MCTSNode) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(child);
        self.get_mut(parent).edges[edge_idx].child = id;
        id
    }

    /// Nodes allocated, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true: the root is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Shape summary of the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        self.nodes.iter().fold(TreeStats::default(), |mut acc, node| {
            acc.nodes += 1;
            acc.max_depth = acc.max_depth.max(node.depth);
            acc.terminal_nodes += usize::from(node.is_terminal());
            acc.edges += node.edges.len();
            acc.tried_edges += node.edges.iter().filter(|e| e.is_tried()).count();
            acc
        })
    }
}

/// Shape summary of a search tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Nodes allocated.
    pub nodes: usize,
    /// Deepest node, in plies below the root.
    pub max_depth: u16,
    /// Nodes where the seat to move was stranded.
    pub terminal_nodes: usize,
    /// Candidate cells over all nodes.
    pub edges: usize,
    /// Candidate cells that have a child.
    pub tried_edges: usize,
}

impl TreeStats {
    /// Average candidate cells per node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.edges as f64 / self.nodes as f64
        }
    }

    /// Share of candidate cells that have been tried.
    #[must_use]
    pub fn tried_ratio(&self) -> f64 {
        if self.edges == 0 {
            0.0
        } else {
            self.tried_edges as f64 / self.edges as f64
        }
    }
}
