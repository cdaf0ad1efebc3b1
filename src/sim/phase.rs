//! Difficulty tiers derived from elapsed ticks

use serde::{Deserialize, Serialize};

/// Tick thresholds, speed per tier (highest tier first)
const PHASE_TABLE: [(u64, u8, f32); 5] = [
    (4000, 5, 16.0),
    (2000, 4, 14.0),
    (1000, 3, 12.0),
    (500, 2, 10.0),
    (0, 1, 8.0),
];

/// A difficulty tier and the world scroll speed that goes with it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedPhase {
    /// 1..=5
    pub index: u8,
    pub speed: f32,
}

impl Default for SpeedPhase {
    fn default() -> Self {
        Self::for_tick(0)
    }
}

impl SpeedPhase {
    /// Phase for the given tick count. Non-decreasing in `tick`.
    pub fn for_tick(tick: u64) -> Self {
        let (_, index, speed) = PHASE_TABLE
            .iter()
            .copied()
            .find(|&(threshold, _, _)| tick >= threshold)
            .unwrap_or(PHASE_TABLE[PHASE_TABLE.len() - 1]);
        Self { index, speed }
    }

    /// `index` as a divisor for the spawn and dash formulas
    #[inline]
    pub fn divisor(&self) -> i32 {
        i32::from(self.index)
    }
}
