//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: how to choose which child to explore (UCB1)
//! - `SimulationPolicy`: how to play out a leaf (random, greedy)

use crate::core::{GameRng, Seat};
use crate::rules::{GameResult, Position};
use crate::strategy::{GreedyStrategy, Strategy};

use super::config::{MCTSConfig, RolloutKind};
use super::node::MCTSNode;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Select an edge index from a fully expanded node.
    fn select(&self, node: &MCTSNode, config: &MCTSConfig) -> usize;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Scores each edge from the perspective of the node's seat to move:
/// `Q(a) + c * sqrt(ln(N) / n(a))`. Unvisited edges score infinity.
/// The earliest edge wins ties.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl SelectionPolicy for UCB1 {
    fn select(&self, node: &MCTSNode, config: &MCTSConfig) -> usize {
        let ln_parent = f64::from(node.visits.max(1)).ln();
        let seat = node.to_move;

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, edge) in node.edges.iter().enumerate() {
            let exploitation = edge.mean_reward(seat);
            let exploration = if edge.visits == 0 {
                f64::INFINITY
            } else {
                config.exploration_constant * (ln_parent / f64::from(edge.visits)).sqrt()
            };
            let score = exploitation + exploration;
            if score > best_score {
                best = i;
                best_score = score;
            }
        }
        best
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for playing a position out to the end.
pub trait SimulationPolicy: Send + Sync {
    /// Play `position` to a terminal state, returning rewards by seat.
    fn simulate(&self, position: &mut Position, rng: &mut GameRng) -> [f64; 2];
}

/// Plays uniformly random legal moves.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl SimulationPolicy for RandomRollout {
    fn simulate(&self, position: &mut Position, rng: &mut GameRng) -> [f64; 2] {
        loop {
            let moves = position.legal_moves();
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range_usize(0..moves.len());
            position.apply(moves[idx]);
        }
        final_rewards(position)
    }
}

/// Plays the greedy move for both seats.
#[derive(Clone, Debug, Default)]
pub struct GreedyRollout;

impl SimulationPolicy for GreedyRollout {
    fn simulate(&self, position: &mut Position, _rng: &mut GameRng) -> [f64; 2] {
        let mut greedy = GreedyStrategy::new();
        while let Some(mv) = greedy.choose_move(position) {
            position.apply(mv);
        }
        final_rewards(position)
    }
}

impl RolloutKind {
    /// Instantiate the rollout policy.
    #[must_use]
    pub fn policy(self) -> Box<dyn SimulationPolicy> {
        match self {
            RolloutKind::Random => Box::new(RandomRollout),
            RolloutKind::Greedy => Box::new(GreedyRollout),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert a game result to rewards by seat.
#[must_use]
pub fn result_to_rewards(result: &GameResult) -> [f64; 2] {
    [result.reward(Seat::First), result.reward(Seat::Second)]
}

/// Rewards for a finished position. Scores earned before the search count.
fn final_rewards(position: &Position) -> [f64; 2] {
    result_to_rewards(&GameResult::from_scores(position.scores()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Move, Scores};
    use crate::mcts::node::Edge;

    fn make_test_node() -> MCTSNode {
        let mut node = MCTSNode::empty(Seat::First, 0);

        // Edge 0: high reward, many visits
        let mut e0 = Edge::new(Move::new(0, 0));
        e0.visits = 100;
        e0.reward = [80.0, 20.0];

        // Edge 1: lower reward, fewer visits
        let mut e1 = Edge::new(Move::new(0, 1));
        e1.visits = 10;
        e1.reward = [7.0, 3.0];

        // Edge 2: unvisited (infinite exploration bonus)
        let e2 = Edge::new(Move::new(0, 2));

        node.edges.push(e0);
        node.edges.push(e1);
        node.edges.push(e2);
        node.visits = 110;

        node
    }

    #[test]
    fn test_ucb1_selects_unvisited() {
        let node = make_test_node();
        assert_eq!(UCB1.select(&node, &MCTSConfig::default()), 2);
    }

    #[test]
    fn test_ucb1_pure_exploitation() {
        let mut node = make_test_node();
        node.edges[2].visits = 5;
        node.edges[2].reward = [1.0, 4.0];

        let config = MCTSConfig::default().with_exploration(0.0);
        // Means for First: 0.8, 0.7, 0.2
        assert_eq!(UCB1.select(&node, &config), 0);

        // Same edges from the second seat's point of view: 0.2, 0.3, 0.8
        node.to_move = Seat::Second;
        assert_eq!(UCB1.select(&node, &config), 2);
    }

    #[test]
    fn test_ucb1_exploration_favours_rare_edges() {
        let mut node = make_test_node();
        node.edges[2].visits = 1;
        node.edges[2].reward = [0.5, 0.5];

        let config = MCTSConfig::default().with_exploration(10.0);
        assert_eq!(UCB1.select(&node, &config), 2);
    }

    #[test]
    fn test_ucb1_ties_keep_first() {
        let mut node = MCTSNode::empty(Seat::First, 0);
        for col in 0..3 {
            let mut edge = Edge::new(Move::new(0, col));
            edge.visits = 4;
            edge.reward = [2.0, 2.0];
            node.edges.push(edge);
        }
        node.visits = 12;
        assert_eq!(UCB1.select(&node, &MCTSConfig::default()), 0);
    }

    #[test]
    fn test_result_to_rewards() {
        assert_eq!(result_to_rewards(&GameResult::Winner(Seat::Second)), [0.0, 1.0]);
        assert_eq!(result_to_rewards(&GameResult::Draw), [0.5, 0.5]);
    }

    #[test]
    fn test_rollouts_reach_terminal() {
        let board = Board::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        let mut rng = GameRng::new(3);

        for kind in [RolloutKind::Random, RolloutKind::Greedy] {
            let mut position = Position::new(board.clone());
            let rewards = kind.policy().simulate(&mut position, &mut rng);
            assert!(position.is_terminal());
            assert_eq!(rewards[0] + rewards[1], 1.0);
        }
    }

    #[test]
    fn test_greedy_rollout_counts_prior_scores() {
        // Second collects both 9s from here, but First is already 20 ahead.
        let board = Board::from_rows(vec![vec![1, 9], vec![9, 1]]).unwrap();
        let mut position =
            Position::from_parts(board, None, Scores::from_values(20, 0), Seat::Second);
        let rewards = GreedyRollout.simulate(&mut position, &mut GameRng::new(0));
        assert_eq!(*position.scores(), Scores::from_values(22, 18));
        assert_eq!(rewards, [1.0, 0.0]);
    }
}
