//! Core MCTS search algorithm.
//!
//! The game has perfect information, so every node is expanded for whichever
//! seat is to move. Each iteration:
//!
//! 1. descends through fully expanded nodes with the selection policy,
//! 2. expands one untried edge, chosen uniformly at random,
//! 3. plays the new leaf out with the simulation policy,
//! 4. adds the rewards of both seats along the path.

use std::time::Instant;

use smallvec::SmallVec;

use crate::core::{GameRng, Move, Seat};
use crate::rules::Position;

use super::config::MCTSConfig;
use super::node::{MCTSNode, NodeId};
use super::policy::{SelectionPolicy, SimulationPolicy, UCB1};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Owns the search tree, configuration and RNG. The tree is rebuilt for
/// every decision; the RNG carries over so consecutive decisions differ.
pub struct MCTSSearch {
    /// Search configuration.
    config: MCTSConfig,

    /// The search tree.
    tree: MCTSTree,

    /// RNG for expansion order and rollouts.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy>,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl MCTSSearch {
    /// Create a new MCTS search context.
    pub fn new(config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);
        let simulation = config.rollout.policy();
        let capacity = config.max_nodes.min(1 << 16);

        Self {
            tree: MCTSTree::with_capacity(Seat::First, capacity),
            config,
            rng,
            selection: Box::new(UCB1),
            simulation,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<S: SimulationPolicy + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Run `config.iterations` iterations from `position`.
    ///
    /// Returns the most visited root move for the seat to move, or `None`
    /// if the position is terminal. A single legal move is returned
    /// without searching.
    pub fn search(&mut self, position: &Position) -> Option<Move> {
        let start = Instant::now();
        self.tree.reset(position);
        self.stats = SearchStats {
            root_moves: self.tree.root().edges.len(),
            ..SearchStats::default()
        };

        match self.stats.root_moves {
            0 => return None,
            1 => return Some(self.tree.root().edges[0].mv),
            _ => {}
        }

        for _ in 0..self.config.iterations {
            if self.tree.len() >= self.config.max_nodes {
                self.stats.node_limit_hit = true;
                break;
            }
            let mut sim = position.clone();
            self.iteration(&mut sim);
            self.stats.iterations += 1;
        }

        self.stats.elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

        self.best_move()
    }

    /// Single iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, position: &mut Position) {
        let mut path: SmallVec<[(NodeId, usize); 32]> = SmallVec::new();
        let mut current = NodeId::ROOT;

        loop {
            let node = self.tree.get(current);

            if let Some(rewards) = node.terminal_rewards() {
                self.stats.terminal_hits += 1;
                self.backpropagate(&path, rewards);
                return;
            }

            if node.has_untried() {
                let edge_idx = self.pick_untried(current);
                path.push((current, edge_idx));

                let mv = self.tree.get(current).edges[edge_idx].mv;
                position.apply(mv);
                self.expand(current, edge_idx, position);

                let rewards = self.simulate(position);
                self.stats.rollouts += 1;
                self.backpropagate(&path, rewards);
                return;
            }

            let edge_idx = self.selection.select(node, &self.config);
            path.push((current, edge_idx));

            let edge = &node.edges[edge_idx];
            let (mv, child) = (edge.mv, edge.child);
            position.apply(mv);
            current = child;
        }
    }

    /// Pick an untried edge uniformly at random.
    fn pick_untried(&mut self, node_id: NodeId) -> usize {
        let untried: SmallVec<[usize; 16]> = self.tree.get(node_id).untried().collect();

        match untried.len() {
            0 => 0,
            1 => untried[0],
            n => untried[self.rng.gen_range_usize(0..n)],
        }
    }

    /// Create the child behind `edge_idx` for the position it leads to.
    fn expand(&mut self, parent: NodeId, edge_idx: usize, position: &Position) -> NodeId {
        let depth = self.tree.get(parent).depth + 1;
        self.stats.deepest_ply = self.stats.deepest_ply.max(depth);
        self.stats.nodes_added += 1;

        self.tree
            .attach(parent, edge_idx, MCTSNode::for_position(position, depth))
    }

    /// Play the leaf out on a forked RNG.
    fn simulate(&mut self, position: &mut Position) -> [f64; 2] {
        let mut sim_rng = self.rng.fork();
        self.simulation.simulate(position, &mut sim_rng)
    }

    /// Add rewards to every node and edge on the path.
    fn backpropagate(&mut self, path: &[(NodeId, usize)], rewards: [f64; 2]) {
        for &(node_id, edge_idx) in path.iter().rev() {
            let node = self.tree.get_mut(node_id);
            node.visits += 1;
            node.edges[edge_idx].record(rewards);
        }
    }

    /// Most visited root edge; legal-move order breaks ties.
    fn best_move(&self) -> Option<Move> {
        self.tree.root().most_visited().map(|e| e.mv)
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the search tree.
    #[must_use]
    pub fn tree(&self) -> &MCTSTree {
        &self.tree
    }

    /// Visit counts of the root moves, in legal-move order.
    pub fn move_visits(&self) -> Vec<(Move, u32)> {
        self.tree
            .root()
            .edges
            .iter()
            .map(|e| (e.mv, e.visits))
            .collect()
    }

    /// Visit share of the root moves.
    ///
    /// Uniform before any iteration has run.
    pub fn move_probabilities(&self) -> Vec<(Move, f64)> {
        let root = self.tree.root();
        let total: u32 = root.edges.iter().map(|e| e.visits).sum();

        if total == 0 {
            let uniform = 1.0 / root.edges.len().max(1) as f64;
            return root.edges.iter().map(|e| (e.mv, uniform)).collect();
        }

        root.edges
            .iter()
            .map(|e| (e.mv, f64::from(e.visits) / f64::from(total)))
            .collect()
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}
