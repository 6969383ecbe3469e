//! Seeded randomness for boards, strategies and rollouts.
//!
//! Every draw in the crate goes through a `GameRng`. A simulation run starts
//! from one seed; board sets and per-game strategy seeds are derived from it
//! with `derive` and `for_context`, never from scheduling order, so runs
//! reproduce across thread counts.
//!
//! ```
//! use rowcol::core::GameRng;
//!
//! let run = GameRng::new(42);
//! let mut boards = run.for_context("boards/5");
//! let mut again = GameRng::new(42).for_context("boards/5");
//! assert_eq!(boards.gen_range_inclusive(1, 9), again.gen_range_inclusive(1, 9));
//!
//! let game_seed = GameRng::derive(42, 17);
//! assert_eq!(game_seed, GameRng::derive(42, 17));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 generator that remembers its seed and can branch.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Mix a seed with a stream index into a new seed.
    ///
    /// SplitMix64 finalizer: nearby inputs give unrelated outputs, so
    /// `derive(s, 0)`, `derive(s, 1)`, ... are safe to use as independent seeds.
    #[must_use]
    pub const fn derive(seed: u64, stream: u64) -> u64 {
        let mut z = seed.wrapping_add(stream.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A new generator on the next branch of this one's seed.
    ///
    /// The n-th fork of a given seed is always the same generator,
    /// whatever has been drawn in between.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(Self::derive(self.seed, self.forks))
    }

    /// A generator named by `context`, independent of this one's draws.
    ///
    /// The label is folded byte by byte through `derive`, so streams are
    /// stable across Rust releases.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let seed = context
            .bytes()
            .fold(Self::derive(self.seed, u64::MAX), |acc, byte| {
                Self::derive(acc, u64::from(byte))
            });
        Self::new(seed)
    }

    /// A value in `low..=high`.
    pub fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }

    /// A value in `range`, which must not be empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// A uniformly chosen element, or `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
