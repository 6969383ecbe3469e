//! Simulation harness.
//!
//! For each board size a fixed `BoardSet` is generated once and shared by
//! every matchup. Each matchup plays every board twice, once per seating,
//! and the counts are turned into a `MatchupResult` row.
//!
//! ```no_run
//! use rowcol::sim::{write_csv_path, SimulationConfig, SimulationRunner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SimulationConfig::default().with_board_sizes(vec![3, 5]);
//! let results = SimulationRunner::new(config)?.run()?;
//! write_csv_path(&results, "results.csv")?;
//! # Ok(())
//! # }
//! ```

pub mod boards;
pub mod config;
pub mod matchup;
pub mod results;
pub mod runner;

pub use boards::BoardSet;
pub use config::{
    required_sample_size, SimulationConfig, DEFAULT_BOARDS_PER_SIZE, DEFAULT_BOARD_SIZES,
};
pub use matchup::{MatchTally, Matchup, Orientation};
pub use results::{write_csv, write_csv_path, MatchupResult};
pub use runner::SimulationRunner;
