//! Simulation settings.
//!
//! Loadable from TOML. Every field has a default, so a file only needs the
//! values it changes:
//!
//! ```toml
//! board_sizes = [3, 5]
//! strategies = ["Greedy", "SafeChoice", "Minimax"]
//! boards_per_size = 100
//!
//! [mcts]
//! iterations = 200
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::strategy::{StrategyKind, StrategySettings};

/// Board sizes swept by default.
pub const DEFAULT_BOARD_SIZES: [usize; 5] = [3, 5, 6, 8, 9];

/// Boards per size: `required_sample_size(0.05, 1.96)` rounded up.
pub const DEFAULT_BOARDS_PER_SIZE: usize = 400;

/// Trials needed for a win-rate estimate with the given margin of error.
///
/// Uses the worst-case Bernoulli variance `p (1 - p) = 0.25`:
/// `ceil(z² * 0.25 / margin²)`. A 5% margin at 95% confidence needs 385.
#[must_use]
pub fn required_sample_size(margin: f64, z: f64) -> usize {
    (z * z * 0.25 / (margin * margin)).ceil() as usize
}

/// What to simulate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Board side lengths, each swept in turn.
    pub board_sizes: Vec<usize>,
    /// Strategies; every unordered pair of distinct entries is a matchup.
    pub strategies: Vec<StrategyKind>,
    /// Boards generated per size and shared by all matchups of that size.
    pub boards_per_size: usize,
    /// Run seed. Boards and strategy seeds are derived from it.
    pub seed: u64,
    /// Smallest cell value.
    pub min_value: u32,
    /// Largest cell value.
    pub max_value: u32,
    /// Play the boards of a matchup on the rayon pool.
    pub parallel: bool,
    /// Search strategy tunables.
    #[serde(flatten)]
    pub settings: StrategySettings,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            board_sizes: DEFAULT_BOARD_SIZES.to_vec(),
            strategies: StrategyKind::ALL.to_vec(),
            boards_per_size: DEFAULT_BOARDS_PER_SIZE,
            seed: 42,
            min_value: 1,
            max_value: 9,
            parallel: true,
            settings: StrategySettings::default(),
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check the settings before any work starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_sizes.is_empty() {
            return Err(ConfigError::NoBoardSizes);
        }
        if self.board_sizes.contains(&0) {
            return Err(ConfigError::ZeroBoardSize);
        }
        if self.strategies.len() < 2 {
            return Err(ConfigError::TooFewStrategies(self.strategies.len()));
        }
        let mut seen = HashSet::new();
        for kind in &self.strategies {
            if !seen.insert(kind) {
                return Err(ConfigError::DuplicateStrategy(kind.to_string()));
            }
        }
        if self.boards_per_size == 0 {
            return Err(ConfigError::ZeroBoards);
        }
        if self.min_value == 0 || self.min_value > self.max_value {
            return Err(ConfigError::ValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    /// Every unordered pair of distinct strategies, in list order.
    #[must_use]
    pub fn matchups(&self) -> Vec<(StrategyKind, StrategyKind)> {
        let mut pairs = Vec::new();
        for (i, &s1) in self.strategies.iter().enumerate() {
            for &s2 in &self.strategies[i + 1..] {
                pairs.push((s1, s2));
            }
        }
        pairs
    }

    /// Set the board sizes.
    pub fn with_board_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.board_sizes = sizes.into();
        self
    }

    /// Set the strategies.
    pub fn with_strategies(mut self, strategies: impl Into<Vec<StrategyKind>>) -> Self {
        self.strategies = strategies.into();
        self
    }

    /// Set the number of boards per size.
    pub fn with_boards_per_size(mut self, boards: usize) -> Self {
        self.boards_per_size = boards;
        self
    }

    /// Set the run seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the cell value range.
    pub fn with_value_range(mut self, min: u32, max: u32) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Enable or disable parallel play.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the search strategy tunables.
    pub fn with_settings(mut self, settings: StrategySettings) -> Self {
        self.settings = settings;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_sample_size() {
        assert_eq!(required_sample_size(0.05, 1.96), 385);
        assert!(DEFAULT_BOARDS_PER_SIZE >= required_sample_size(0.05, 1.96));
    }

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        config.validate().unwrap();
        assert_eq!(config.board_sizes, vec![3, 5, 6, 8, 9]);
        assert_eq!(config.strategies.len(), 5);
        assert_eq!(config.matchups().len(), 10);
    }

    #[test]
    fn test_matchups_are_unordered_pairs() {
        let config = SimulationConfig::default().with_strategies(vec![
            StrategyKind::Greedy,
            StrategyKind::Random,
            StrategyKind::SafeChoice,
        ]);
        assert_eq!(
            config.matchups(),
            vec![
                (StrategyKind::Greedy, StrategyKind::Random),
                (StrategyKind::Greedy, StrategyKind::SafeChoice),
                (StrategyKind::Random, StrategyKind::SafeChoice),
            ]
        );
    }

    #[test]
    fn test_validate_rejects() {
        let base = SimulationConfig::default();

        let err = base.clone().with_board_sizes(Vec::new()).validate().unwrap_err();
        assert!(matches!(err, ConfigError::NoBoardSizes));

        let err = base.clone().with_board_sizes(vec![3, 0]).validate().unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBoardSize));

        let err = base
            .clone()
            .with_strategies(vec![StrategyKind::Greedy])
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::TooFewStrategies(1)));

        let err = base
            .clone()
            .with_strategies(vec![StrategyKind::Greedy, StrategyKind::Greedy])
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateStrategy(ref name) if name == "Greedy"));

        let err = base.clone().with_boards_per_size(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBoards));

        let err = base.clone().with_value_range(0, 9).validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValueRange { min: 0, max: 9 }));

        let err = base.with_value_range(7, 3).validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValueRange { .. }));
    }

    #[test]
    fn test_from_toml() {
        let config = SimulationConfig::from_toml_str(
            r#"
            board_sizes = [3, 5]
            strategies = ["Greedy", "SafeChoice", "Minimax"]
            boards_per_size = 25
            parallel = false

            [mcts]
            iterations = 200

            [alpha_beta]
            max_depth = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.board_sizes, vec![3, 5]);
        assert_eq!(config.strategies[2], StrategyKind::AlphaBeta);
        assert_eq!(config.boards_per_size, 25);
        assert!(!config.parallel);
        assert_eq!(config.settings.mcts.iterations, 200);
        assert_eq!(config.settings.alpha_beta.max_depth, 2);
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_value, 9);
    }

    #[test]
    fn test_from_toml_unknown_strategy() {
        let err =
            SimulationConfig::from_toml_str(r#"strategies = ["Greedy", "Oracle"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Oracle"));
    }

    #[test]
    fn test_from_toml_invalid_values() {
        let err = SimulationConfig::from_toml_str("boards_per_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBoards));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimulationConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
