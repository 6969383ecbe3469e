//! Seats, scores and players.
//!
//! ## Seat
//!
//! Which of the two players acts. `Seat::First` always opens the game.
//!
//! ## Scores
//!
//! The running score pair, indexable by `Seat`.
//!
//! ## Player
//!
//! A display name plus either a human marker or a strategy that picks
//! moves on its own.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::strategy::Strategy;

/// One of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    /// The player who moves first.
    First,
    /// The player who moves second.
    Second,
}

impl Seat {
    /// Both seats in turn order.
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    /// Get the 0-based seat index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Get the opposing seat.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Score pair, one entry per seat.
///
/// Scores only ever grow during a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores([u64; 2]);

impl Scores {
    /// Both scores at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self([0, 0])
    }

    /// Create from explicit values (first seat, second seat).
    #[must_use]
    pub const fn from_values(first: u64, second: u64) -> Self {
        Self([first, second])
    }

    /// Credit a seat with a taken cell's value.
    pub fn add(&mut self, seat: Seat, value: u32) {
        self.0[seat.index()] += u64::from(value);
    }

    /// Sum of both scores.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0[0] + self.0[1]
    }

    /// Score margin from `seat`'s point of view.
    #[must_use]
    pub fn margin(&self, seat: Seat) -> i64 {
        self[seat] as i64 - self[seat.other()] as i64
    }

    /// The seat with the strictly higher score, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Seat> {
        match self.0[0].cmp(&self.0[1]) {
            std::cmp::Ordering::Greater => Some(Seat::First),
            std::cmp::Ordering::Less => Some(Seat::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Index<Seat> for Scores {
    type Output = u64;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.0[seat.index()]
    }
}

impl IndexMut<Seat> for Scores {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.0[seat.index()]
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0[0], self.0[1])
    }
}

/// How a player picks moves.
pub enum PlayerKind {
    /// Moves are supplied from outside through `Game::apply_move`.
    Human,
    /// Moves are chosen by a strategy.
    Automated(Box<dyn Strategy>),
}

/// A named participant in one game.
pub struct Player {
    name: String,
    kind: PlayerKind,
}

impl Player {
    /// Create a human player.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    /// Create an automated player driven by `strategy`.
    pub fn automated(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Automated(strategy),
        }
    }

    /// Create an automated player named after its strategy.
    pub fn from_strategy(strategy: Box<dyn Strategy>) -> Self {
        let name = strategy.name().to_string();
        Self::automated(name, strategy)
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if moves come from outside.
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self.kind, PlayerKind::Human)
    }

    /// Get the strategy of an automated player.
    pub fn strategy_mut(&mut self) -> Option<&mut dyn Strategy> {
        match &mut self.kind {
            PlayerKind::Human => None,
            PlayerKind::Automated(strategy) => Some(strategy.as_mut()),
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.kind {
            PlayerKind::Human => "Human".to_string(),
            PlayerKind::Automated(s) => format!("Automated({})", s.name()),
        };
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}
