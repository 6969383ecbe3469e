//! Move-selection strategies.
//!
//! Every algorithm implements `Strategy`. The contract:
//!
//! - The returned move must come from `position.legal_moves()`. The engine
//!   treats anything else as a fatal error and never repairs it.
//! - `None` only when no legal move exists.
//! - Deterministic strategies (Greedy, SafeChoice, AlphaBeta) return the
//!   same move for the same position. Stochastic ones (Random, MCTS) draw
//!   from a seeded `GameRng`.
//!
//! ## Selecting by name
//!
//! ```
//! use rowcol::strategy::{StrategyKind, StrategySettings};
//!
//! let kind: StrategyKind = "SafeChoice".parse().unwrap();
//! let strategy = kind.build(&StrategySettings::default(), 7);
//! assert_eq!(strategy.name(), "SafeChoice");
//!
//! assert!("Clairvoyant".parse::<StrategyKind>().is_err());
//! ```

pub mod alpha_beta;
pub mod greedy;
pub mod random;
pub mod safe_choice;

pub use alpha_beta::{AlphaBetaConfig, AlphaBetaStrategy};
pub use greedy::GreedyStrategy;
pub use random::RandomStrategy;
pub use safe_choice::{LineSummary, SafeChoiceStrategy, SafetyScore};

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Move};
use crate::mcts::{MCTSConfig, MCTSStrategy};
use crate::rules::Position;

/// A move-selection algorithm.
pub trait Strategy: Send {
    /// Canonical name, used in logs, errors and exported results.
    fn name(&self) -> &str;

    /// Pick a move for `position.to_move()`.
    fn choose_move(&mut self, position: &Position) -> Option<Move>;
}

/// Strategy identifiers accepted in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrategyKind {
    /// Uniform random legal move.
    Random,
    /// Highest value, lowest row then column on ties.
    Greedy,
    /// Highest value, then parity tie-breaks.
    SafeChoice,
    /// Monte Carlo Tree Search.
    Mcts,
    /// Alpha-beta search (configured as "Minimax").
    AlphaBeta,
}

impl StrategyKind {
    /// Every strategy, in the default sweep order.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Random,
        StrategyKind::Greedy,
        StrategyKind::SafeChoice,
        StrategyKind::Mcts,
        StrategyKind::AlphaBeta,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "Random",
            StrategyKind::Greedy => "Greedy",
            StrategyKind::SafeChoice => "SafeChoice",
            StrategyKind::Mcts => "MCTS",
            StrategyKind::AlphaBeta => "Minimax",
        }
    }

    /// Check if the strategy draws random numbers.
    #[must_use]
    pub const fn is_stochastic(self) -> bool {
        matches!(self, StrategyKind::Random | StrategyKind::Mcts)
    }

    /// Build a fresh instance.
    ///
    /// `seed` feeds the internal RNG of stochastic strategies and is ignored
    /// by the others.
    #[must_use]
    pub fn build(self, settings: &StrategySettings, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(seed)),
            StrategyKind::Greedy => Box::new(GreedyStrategy::new()),
            StrategyKind::SafeChoice => Box::new(SafeChoiceStrategy::new()),
            StrategyKind::Mcts => {
                Box::new(MCTSStrategy::new(settings.mcts.clone().with_seed(seed)))
            }
            StrategyKind::AlphaBeta => {
                Box::new(AlphaBetaStrategy::new(settings.alpha_beta.clone()))
            }
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Random" => Ok(StrategyKind::Random),
            "Greedy" => Ok(StrategyKind::Greedy),
            "SafeChoice" => Ok(StrategyKind::SafeChoice),
            "MCTS" => Ok(StrategyKind::Mcts),
            "Minimax" | "AlphaBeta" => Ok(StrategyKind::AlphaBeta),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StrategyKind> for String {
    fn from(kind: StrategyKind) -> Self {
        kind.name().to_string()
    }
}

/// Tunables for the search strategies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    /// Alpha-beta depth settings.
    pub alpha_beta: AlphaBetaConfig,
    /// MCTS budget and exploration settings. The seed is replaced per game.
    pub mcts: MCTSConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    #[test]
    fn test_parse_names() {
        assert_eq!("Random".parse::<StrategyKind>().unwrap(), StrategyKind::Random);
        assert_eq!("Greedy".parse::<StrategyKind>().unwrap(), StrategyKind::Greedy);
        assert_eq!("SafeChoice".parse::<StrategyKind>().unwrap(), StrategyKind::SafeChoice);
        assert_eq!("MCTS".parse::<StrategyKind>().unwrap(), StrategyKind::Mcts);
        assert_eq!("Minimax".parse::<StrategyKind>().unwrap(), StrategyKind::AlphaBeta);
        assert_eq!("AlphaBeta".parse::<StrategyKind>().unwrap(), StrategyKind::AlphaBeta);
    }

    #[test]
    fn test_unknown_name() {
        let err = "greedy".parse::<StrategyKind>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownStrategy(ref name) if name == "greedy"));
    }

    #[test]
    fn test_display_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_stochastic_kinds() {
        let stochastic: Vec<_> = StrategyKind::ALL
            .into_iter()
            .filter(|k| k.is_stochastic())
            .collect();
        assert_eq!(stochastic, vec![StrategyKind::Random, StrategyKind::Mcts]);
    }

    #[test]
    fn test_build_names_match() {
        let settings = StrategySettings::default();
        for kind in StrategyKind::ALL {
            assert_eq!(kind.build(&settings, 1).name(), kind.name());
        }
    }

    #[test]
    fn test_every_strategy_plays_legal_moves() {
        let settings = StrategySettings {
            mcts: MCTSConfig::default().with_iterations(50),
            ..StrategySettings::default()
        };
        let board = Board::from_rows(vec![vec![3, 7, 2], vec![5, 5, 1], vec![8, 4, 6]]).unwrap();

        for kind in StrategyKind::ALL {
            let mut strategy = kind.build(&settings, 11);
            let mut position = Position::new(board.clone());
            while !position.is_terminal() {
                let mv = strategy.choose_move(&position).expect("legal moves remain");
                assert!(position.is_legal(mv), "{} chose illegal {}", kind, mv);
                position.apply(mv);
            }
            assert_eq!(
                strategy.choose_move(&position),
                None,
                "{} moved in a terminal position",
                kind
            );
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&StrategyKind::AlphaBeta).unwrap();
        assert_eq!(json, "\"Minimax\"");
        let kind: StrategyKind = serde_json::from_str("\"MCTS\"").unwrap();
        assert_eq!(kind, StrategyKind::Mcts);
        assert!(serde_json::from_str::<StrategyKind>("\"Oracle\"").is_err());
    }
}
