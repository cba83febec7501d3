//! Seedable randomness for layout scrambling.
//!
//! Layout generation draws every random number (day shuffle and per-door jitter) from a
//! [`LayoutRng`], so a fixed seed always produces the same layout on every platform.

use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
pub struct LayoutRng(ChaCha8Rng);

impl LayoutRng {
    /// Deterministic generator for tests and reproducible CLI output.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// Uniform sample in `[-magnitude, magnitude]`.
    pub(crate) fn symmetric(&mut self, magnitude: f64) -> f64 {
        if magnitude <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-magnitude..=magnitude)
    }

    pub(crate) fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }
}

impl Default for LayoutRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
