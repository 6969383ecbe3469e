//! rowcol - Row-Column game simulator
//!
//! `simulate` runs the strategy sweep and writes CSV; `play` plays a single
//! game on a board file and prints the moves.

#![warn(missing_docs)]

mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rowcol::core::{GameRng, Player, Seat};
use rowcol::io::load_board;
use rowcol::rules::{Game, GameResult};
use rowcol::sim::{write_csv_path, SimulationConfig, SimulationRunner};
use rowcol::strategy::{StrategyKind, StrategySettings};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate {
            config,
            sizes,
            strategies,
            boards,
            seed,
            mcts_iterations,
            sequential,
            out,
        } => {
            let mut config = match config {
                Some(path) => SimulationConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => SimulationConfig::default(),
            };
            if let Some(sizes) = sizes {
                config.board_sizes = sizes;
            }
            if let Some(strategies) = strategies {
                config.strategies = strategies;
            }
            if let Some(boards) = boards {
                config.boards_per_size = boards;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(iterations) = mcts_iterations {
                config.settings.mcts.iterations = iterations;
            }
            if sequential {
                config.parallel = false;
            }
            run_simulation(config, out)
        }
        Command::Play {
            board,
            first,
            second,
            seed,
        } => play_game(board, first, second, seed),
    }
}

/// Run the sweep and export the results
#[instrument(skip(config), fields(seed = config.seed))]
fn run_simulation(config: SimulationConfig, out: PathBuf) -> Result<()> {
    let runner = SimulationRunner::new(config).context("invalid simulation config")?;
    info!(
        sizes = ?runner.config().board_sizes,
        strategies = ?runner.config().strategies,
        boards = runner.config().boards_per_size,
        "starting simulation"
    );

    let results = runner.run()?;
    for result in &results {
        println!("{result}");
    }

    write_csv_path(&results, &out)?;
    info!(rows = results.len(), path = %out.display(), "results written");
    Ok(())
}

/// Play one game and print its record
fn play_game(board: PathBuf, first: StrategyKind, second: StrategyKind, seed: u64) -> Result<()> {
    let board = load_board(&board)?;
    let settings = StrategySettings::default();
    let player = |kind: StrategyKind, seat: Seat| {
        Player::from_strategy(kind.build(&settings, GameRng::derive(seed, seat.index() as u64)))
    };

    println!("{board}\n");
    let game = Game::new(board, player(first, Seat::First), player(second, Seat::Second));
    let summary = game.run()?;

    for record in &summary.history {
        let name = if record.seat == Seat::First { first } else { second };
        println!(
            "{:>3}. {} ({}) takes {} for {}",
            record.ply + 1,
            record.seat,
            name,
            record.mv,
            record.value
        );
    }

    println!("\nFinal score: {}", summary.scores);
    match summary.result {
        GameResult::Winner(seat) => {
            let name = if seat == Seat::First { first } else { second };
            println!("{seat} ({name}) wins");
        }
        GameResult::Draw => println!("Draw"),
    }
    Ok(())
}
