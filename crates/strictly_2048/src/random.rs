//! Random number sources.
//!
//! The game only ever asks for a uniformly distributed integer in an
//! inclusive range, so that is the whole boundary.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Produces uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer in `min..=max`. Callers guarantee `min <= max`.
    fn uniform_int(&mut self, min: u32, max: u32) -> u32;
}

/// Seedable source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRandom {
    seed: u64,
    rng: StdRng,
}

impl StdRandom {
    /// Creates a source that replays the same sequence for the same seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "Seeding random source");
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source from a fresh random seed.
    ///
    /// The seed is still recorded so a session can be replayed.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for StdRandom {
    fn uniform_int(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed list of draws.
///
/// Each draw is clamped into the requested range. Once the script is
/// exhausted every draw returns `min`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<u32>,
}

impl ScriptedRandom {
    /// Creates a source that returns `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, min: u32, max: u32) -> u32 {
        self.draws
            .pop_front()
            .map_or(min, |draw| draw.clamp(min, max))
    }
}
