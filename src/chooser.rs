//! Reply variant selection.
//!
//! Every "pick one of N" decision goes through a [`Chooser`], so sessions can
//! run on the thread RNG, a seeded RNG, or a fixed index in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one index out of `len` candidates.
pub trait Chooser {
    /// Returns an index in `0..len`. Only called with `len > 0`.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Picks one of `items`, or `""` when `items` is empty.
    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        if items.is_empty() {
            return "";
        }
        let idx = self.choose_index(items.len()).min(items.len() - 1);
        items[idx]
    }
}

/// Uniform random choice from a [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl Chooser for RandomChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same position (wrapped to the candidate count).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}
