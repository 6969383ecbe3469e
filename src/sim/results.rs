//! Aggregated matchup results and CSV export.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::SimError;
use crate::strategy::StrategyKind;

use super::matchup::MatchTally;

/// One exported row: a (board size, strategy pair) summary.
///
/// Field names follow the CSV header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchupResult {
    /// Board side length.
    pub board_size: usize,
    /// Strategy 1.
    #[serde(rename = "S1")]
    pub s1: StrategyKind,
    /// Strategy 2.
    #[serde(rename = "S2")]
    pub s2: StrategyKind,
    /// Share of boards S1 won when moving first.
    #[serde(rename = "S1_win_rate_as_P1")]
    pub s1_win_rate_as_p1: f64,
    /// Share of boards S1 won when moving second.
    #[serde(rename = "S1_win_rate_as_P2")]
    pub s1_win_rate_as_p2: f64,
    /// Share of all games drawn.
    pub total_tie_rate: f64,
    /// Share of decided games won by the first mover; 0 when every game was drawn.
    pub starter_win_rate: f64,
    /// Raw counts behind the rates.
    #[serde(skip)]
    pub tally: MatchTally,
}

impl MatchupResult {
    /// Derive the rates from a tally.
    #[must_use]
    pub fn from_tally(
        board_size: usize,
        s1: StrategyKind,
        s2: StrategyKind,
        tally: MatchTally,
    ) -> Self {
        let ratio = |num: u64, den: u64| if den == 0 { 0.0 } else { num as f64 / den as f64 };
        let decided = tally.games() - tally.ties;

        Self {
            board_size,
            s1,
            s2,
            s1_win_rate_as_p1: ratio(tally.s1_wins_as_p1, tally.boards),
            s1_win_rate_as_p2: ratio(tally.s1_wins_as_p2, tally.boards),
            total_tie_rate: ratio(tally.ties, tally.games()),
            starter_win_rate: ratio(tally.starter_wins, decided),
            tally,
        }
    }
}

impl std::fmt::Display for MatchupResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} {:>10} vs {:<10} P1 {:>5.1}%  P2 {:>5.1}%  ties {:>5.1}%  starter {:>5.1}%",
            self.board_size,
            self.board_size,
            self.s1,
            self.s2,
            self.s1_win_rate_as_p1 * 100.0,
            self.s1_win_rate_as_p2 * 100.0,
            self.total_tie_rate * 100.0,
            self.starter_win_rate * 100.0,
        )
    }
}

/// Write results as CSV, header first.
pub fn write_csv<W: io::Write>(results: &[MatchupResult], writer: W) -> Result<(), SimError> {
    let mut writer = csv::Writer::from_writer(writer);
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write results to a CSV file, replacing it.
pub fn write_csv_path(results: &[MatchupResult], path: impl AsRef<Path>) -> Result<(), SimError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(results, io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally() -> MatchTally {
        MatchTally {
            boards: 10,
            s1_wins_as_p1: 6,
            s1_wins_as_p2: 3,
            s2_wins_as_p1: 5,
            s2_wins_as_p2: 2,
            ties: 4,
            starter_wins: 11,
        }
    }

    #[test]
    fn test_rates() {
        let r =
            MatchupResult::from_tally(5, StrategyKind::Greedy, StrategyKind::AlphaBeta, tally());
        assert_eq!(r.s1_win_rate_as_p1, 0.6);
        assert_eq!(r.s1_win_rate_as_p2, 0.3);
        assert_eq!(r.total_tie_rate, 0.2);
        assert_eq!(r.starter_win_rate, 11.0 / 16.0);
    }

    #[test]
    fn test_all_ties() {
        let t = MatchTally {
            boards: 3,
            ties: 6,
            ..MatchTally::default()
        };
        let r = MatchupResult::from_tally(3, StrategyKind::Greedy, StrategyKind::SafeChoice, t);
        assert_eq!(r.total_tie_rate, 1.0);
        assert_eq!(r.starter_win_rate, 0.0);
        assert_eq!(r.s1_win_rate_as_p1, 0.0);
    }

    #[test]
    fn test_csv_header_and_rows() {
        let results = vec![
            MatchupResult::from_tally(5, StrategyKind::Greedy, StrategyKind::AlphaBeta, tally()),
            MatchupResult::from_tally(3, StrategyKind::Random, StrategyKind::Mcts, MatchTally {
                boards: 4,
                s2_wins_as_p1: 4,
                s2_wins_as_p2: 4,
                starter_wins: 4,
                ..MatchTally::default()
            }),
        ];
        let mut out = Vec::new();
        write_csv(&results, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "board_size,S1,S2,S1_win_rate_as_P1,S1_win_rate_as_P2,total_tie_rate,starter_win_rate"
        );
        assert_eq!(lines[1], "5,Greedy,Minimax,0.6,0.3,0.2,0.6875");
        assert_eq!(lines[2], "3,Random,MCTS,0.0,0.0,0.0,0.5");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let results = vec![MatchupResult::from_tally(
            3,
            StrategyKind::Greedy,
            StrategyKind::Random,
            tally(),
        )];
        write_csv_path(&results, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<MatchupResult> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].s2, StrategyKind::Random);
        assert_eq!(rows[0].s1_win_rate_as_p1, 0.6);
        // Counts are not exported
        assert_eq!(rows[0].tally, MatchTally::default());
    }

    #[test]
    fn test_csv_unwritable_path() {
        let err = write_csv_path(&[], "/definitely/not/here/results.csv").unwrap_err();
        assert!(matches!(err, SimError::Io { .. }));
    }
}
