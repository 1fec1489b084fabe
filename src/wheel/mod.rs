//! American double-zero roulette wheel.
//!
//! The wheel owns its random source so that a simulation can be replayed
//! exactly from a seed. Production runs seed from OS entropy; tests use
//! [`Wheel::seeded`] or script pockets through [`PocketSource`].

pub mod colors;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::types::Pocket;

/// Number of pockets on an American wheel: 1–36, 0 and 00.
pub const POCKET_COUNT: usize = 38;

/// Anything that can produce the winning pocket for a round.
#[cfg_attr(test, mockall::automock)]
pub trait PocketSource {
    /// Produce the next winning pocket.
    fn spin(&mut self) -> Pocket;
}

/// A fixed 38-pocket wheel with its own random generator.
#[derive(Debug, Clone)]
pub struct Wheel<R: Rng> {
    pockets: Vec<Pocket>,
    rng: R,
}

impl<R: Rng> Wheel<R> {
    /// Build a wheel driven by an explicit generator.
    pub fn new(rng: R) -> Self {
        let mut pockets = Vec::with_capacity(POCKET_COUNT);
        pockets.extend((1..=36).map(Pocket::Number));
        pockets.push(Pocket::Zero);
        pockets.push(Pocket::DoubleZero);
        Self { pockets, rng }
    }

    /// The wheel layout. Immutable after construction.
    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }

    /// Pick one pocket uniformly at random.
    pub fn spin(&mut self) -> Pocket {
        let index = self.rng.gen_range(0..self.pockets.len());
        let pocket = self.pockets[index];
        trace!(%pocket, "Wheel spun");
        pocket
    }
}

impl Wheel<StdRng> {
    /// Deterministic wheel for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Wheel seeded from OS entropy. Two runs are expected to differ.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PocketSource for Wheel<R> {
    fn spin(&mut self) -> Pocket {
        Wheel::spin(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
