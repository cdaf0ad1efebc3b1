//! High score tracking
//!
//! Lives in memory for the lifetime of the process; survives session resets
//! but is never written anywhere.

use serde::{Deserialize, Serialize};

/// Best score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    pub fn new() -> Self {
        Self { best: 0 }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Check if a score would beat the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        true
    }
}
