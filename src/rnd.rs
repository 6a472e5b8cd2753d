//! Deterministic randomness for official test case closures.
//!
//! Seeded from the runner's `--seed` argument so a problem's generated data
//! is reproducible across machines and runs.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// A seeded random helper.
pub struct Rnd {
    rng: Xoshiro256StarStar,
}

impl Rnd {
    pub fn new(seed: u64) -> Self {
        Rnd {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// A uniform integer in `[lo, hi]`.
    ///
    /// Panics when `lo > hi`.
    pub fn next_i64(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "empty range: {lo}..={hi}");
        self.rng.gen_range(lo..=hi)
    }

    /// A uniform float in `[lo, hi)`.
    pub fn next_f64(&mut self, lo: f64, hi: f64) -> f64 {
        assert!(lo < hi, "empty range: {lo}..{hi}");
        self.rng.gen_range(lo..hi)
    }

    /// Shuffles a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
