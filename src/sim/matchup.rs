//! Paired matches between two strategies.
//!
//! Every board is played twice, once per seating. Results are tallied as
//! plain counts so per-board tallies can be summed in any order.

use std::ops::{Add, AddAssign};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, GameRng, Player, Seat, SimError};
use crate::rules::{Game, GameResult};
use crate::strategy::{StrategyKind, StrategySettings};

use super::boards::BoardSet;

/// Which strategy of the pair moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// S1 first, S2 second.
    Forward = 0,
    /// S2 first, S1 second.
    Swapped = 1,
}

impl Orientation {
    /// Both seatings, forward first.
    pub const BOTH: [Orientation; 2] = [Orientation::Forward, Orientation::Swapped];
}

/// Raw counts for one matchup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    /// Boards played (two games each).
    pub boards: u64,
    /// S1 won while moving first.
    pub s1_wins_as_p1: u64,
    /// S1 won while moving second.
    pub s1_wins_as_p2: u64,
    /// S2 won while moving first.
    pub s2_wins_as_p1: u64,
    /// S2 won while moving second.
    pub s2_wins_as_p2: u64,
    /// Drawn games.
    pub ties: u64,
    /// Games won by whoever moved first.
    pub starter_wins: u64,
}

impl MatchTally {
    /// Count one finished game.
    pub fn record(&mut self, orientation: Orientation, result: GameResult) {
        match (orientation, result) {
            (_, GameResult::Draw) => self.ties += 1,
            (Orientation::Forward, GameResult::Winner(Seat::First)) => {
                self.s1_wins_as_p1 += 1;
                self.starter_wins += 1;
            }
            (Orientation::Forward, GameResult::Winner(Seat::Second)) => self.s2_wins_as_p2 += 1,
            (Orientation::Swapped, GameResult::Winner(Seat::First)) => {
                self.s2_wins_as_p1 += 1;
                self.starter_wins += 1;
            }
            (Orientation::Swapped, GameResult::Winner(Seat::Second)) => self.s1_wins_as_p2 += 1,
        }
    }

    /// Games played.
    #[must_use]
    pub fn games(&self) -> u64 {
        self.boards * 2
    }

    /// Decided games.
    #[must_use]
    pub fn wins(&self) -> u64 {
        self.s1_wins_as_p1 + self.s1_wins_as_p2 + self.s2_wins_as_p1 + self.s2_wins_as_p2
    }
}

impl AddAssign for MatchTally {
    fn add_assign(&mut self, other: Self) {
        self.boards += other.boards;
        self.s1_wins_as_p1 += other.s1_wins_as_p1;
        self.s1_wins_as_p2 += other.s1_wins_as_p2;
        self.s2_wins_as_p1 += other.s2_wins_as_p1;
        self.s2_wins_as_p2 += other.s2_wins_as_p2;
        self.ties += other.ties;
        self.starter_wins += other.starter_wins;
    }
}

impl Add for MatchTally {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl std::iter::Sum for MatchTally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Two distinct strategies and the settings they are built with.
#[derive(Clone, Copy, Debug)]
pub struct Matchup<'a> {
    /// Strategy 1.
    pub s1: StrategyKind,
    /// Strategy 2.
    pub s2: StrategyKind,
    /// Search tunables.
    pub settings: &'a StrategySettings,
    /// Run seed.
    pub seed: u64,
}

impl<'a> Matchup<'a> {
    /// Pair two strategies.
    pub fn new(
        s1: StrategyKind,
        s2: StrategyKind,
        settings: &'a StrategySettings,
        seed: u64,
    ) -> Self {
        Self { s1, s2, settings, seed }
    }

    /// Seed for one seat of one game.
    ///
    /// Depends only on the game's coordinates, never on scheduling, so
    /// parallel and sequential runs agree.
    #[must_use]
    pub fn game_seed(
        &self,
        size: usize,
        board: usize,
        orientation: Orientation,
        seat: Seat,
    ) -> u64 {
        let pair = ((self.s1 as u64) << 8) | self.s2 as u64;
        let game = ((board as u64) << 2) | ((orientation as u64) << 1) | seat.index() as u64;
        let seed = GameRng::derive(self.seed, size as u64);
        GameRng::derive(GameRng::derive(seed, pair), game)
    }

    /// Play one seating on one board.
    pub fn play_game(
        &self,
        board: &Board,
        size: usize,
        index: usize,
        orientation: Orientation,
    ) -> Result<GameResult, SimError> {
        let (first, second) = match orientation {
            Orientation::Forward => (self.s1, self.s2),
            Orientation::Swapped => (self.s2, self.s1),
        };
        let build = |kind: StrategyKind, seat: Seat| {
            let seed = self.game_seed(size, index, orientation, seat);
            Player::from_strategy(kind.build(self.settings, seed))
        };

        let game = Game::new(
            board.clone(),
            build(first, Seat::First),
            build(second, Seat::Second),
        );
        let summary = game.run().map_err(|source| SimError::Game {
            size,
            board: index,
            first: first.to_string(),
            second: second.to_string(),
            source,
        })?;

        debug!(
            size,
            board = index,
            %first,
            %second,
            scores = %summary.scores,
            "game finished"
        );
        Ok(summary.result)
    }

    /// Play both seatings on one board.
    pub fn play_board(
        &self,
        board: &Board,
        size: usize,
        index: usize,
    ) -> Result<MatchTally, SimError> {
        let mut tally = MatchTally {
            boards: 1,
            ..MatchTally::default()
        };
        for orientation in Orientation::BOTH {
            let result = self.play_game(board, size, index, orientation)?;
            tally.record(orientation, result);
        }
        Ok(tally)
    }

    /// Play every board of a set, optionally on the rayon pool.
    pub fn play(&self, boards: &BoardSet, parallel: bool) -> Result<MatchTally, SimError> {
        let size = boards.size();
        if parallel {
            let tallies = boards
                .boards()
                .par_iter()
                .enumerate()
                .map(|(i, board)| self.play_board(board, size, i))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(tallies.into_iter().sum())
        } else {
            boards
                .boards()
                .iter()
                .enumerate()
                .map(|(i, board)| self.play_board(board, size, i))
                .sum()
        }
    }
}
