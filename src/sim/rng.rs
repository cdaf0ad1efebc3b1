//! Random source shared by every subsystem
//!
//! All draws within a tick happen in a fixed order (dash, obstacles, clouds),
//! so a seeded source reproduces a whole run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Uniform integer draws with inclusive bounds
pub trait RandomSource {
    /// Uniform integer in `[lo, hi]`
    fn int_in(&mut self, lo: i32, hi: i32) -> i32;
}

impl<R: Rng> RandomSource for R {
    fn int_in(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi, "empty draw range [{lo}, {hi}]");
        self.random_range(lo..=hi)
    }
}

/// RNG seed wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}
