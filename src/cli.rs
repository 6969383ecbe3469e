//! Command-line interface for rowcol.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rowcol::strategy::StrategyKind;

/// Row-Column board game: strategy simulations and single games
#[derive(Parser, Debug)]
#[command(name = "rowcol")]
#[command(about = "Compare Row-Column strategies over many random boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sweep board sizes and strategy pairs, writing one CSV row per pair
    Simulate {
        /// TOML configuration file; flags below override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board sizes, comma-separated
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        /// Strategies, comma-separated (Random, Greedy, SafeChoice, MCTS, Minimax)
        #[arg(long, value_delimiter = ',')]
        strategies: Option<Vec<StrategyKind>>,

        /// Boards per size
        #[arg(short, long)]
        boards: Option<usize>,

        /// Run seed
        #[arg(long)]
        seed: Option<u64>,

        /// MCTS iterations per decision
        #[arg(long)]
        mcts_iterations: Option<u32>,

        /// Play games one at a time instead of on the thread pool
        #[arg(long)]
        sequential: bool,

        /// Output CSV file
        #[arg(short, long, default_value = "results.csv")]
        out: PathBuf,
    },

    /// Play one game between two strategies on a board file
    Play {
        /// Board file: comma-separated integers, one row per line
        #[arg(long)]
        board: PathBuf,

        /// Strategy moving first
        #[arg(long)]
        first: StrategyKind,

        /// Strategy moving second
        #[arg(long)]
        second: StrategyKind,

        /// Seed for the stochastic strategies
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}
