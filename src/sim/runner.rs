//! The sweep over board sizes and strategy pairs.

use tracing::info;

use crate::core::{ConfigError, GameRng, SimError};
use crate::strategy::StrategyKind;

use super::boards::BoardSet;
use super::config::SimulationConfig;
use super::matchup::Matchup;
use super::results::MatchupResult;

/// Runs a validated `SimulationConfig`.
#[derive(Clone, Debug)]
pub struct SimulationRunner {
    config: SimulationConfig,
}

impl SimulationRunner {
    /// Validate the configuration and wrap it.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration being run.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Generate the shared boards for one size.
    #[must_use]
    pub fn boards_for(&self, size: usize) -> BoardSet {
        BoardSet::generate(
            &GameRng::new(self.config.seed),
            size,
            self.config.boards_per_size,
            self.config.min_value,
            self.config.max_value,
        )
    }

    /// Play one matchup on a board set.
    pub fn run_matchup(
        &self,
        boards: &BoardSet,
        s1: StrategyKind,
        s2: StrategyKind,
    ) -> Result<MatchupResult, SimError> {
        let matchup = Matchup::new(s1, s2, &self.config.settings, self.config.seed);
        let tally = matchup.play(boards, self.config.parallel)?;
        let result = MatchupResult::from_tally(boards.size(), s1, s2, tally);

        info!(
            size = boards.size(),
            %s1,
            %s2,
            s1_as_p1 = result.s1_win_rate_as_p1,
            s1_as_p2 = result.s1_win_rate_as_p2,
            ties = result.total_tie_rate,
            starter = result.starter_win_rate,
            "matchup finished"
        );
        Ok(result)
    }

    /// Run every size and every unordered strategy pair.
    ///
    /// Results come out ordered by size (as configured), then pair.
    /// The first aborted game aborts the whole run.
    pub fn run(&self) -> Result<Vec<MatchupResult>, SimError> {
        let matchups = self.config.matchups();
        let mut results = Vec::with_capacity(self.config.board_sizes.len() * matchups.len());

        for &size in &self.config.board_sizes {
            info!(
                size,
                boards = self.config.boards_per_size,
                matchups = matchups.len(),
                "simulating board size"
            );
            let boards = self.boards_for(size);
            for &(s1, s2) in &matchups {
                results.push(self.run_matchup(&boards, s1, s2)?);
            }
        }

        Ok(results)
    }
}
