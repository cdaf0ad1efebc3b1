//! Platform abstraction layer
//!
//! Host-facing pieces around the simulation:
//! - Key state fed by the host's key events
//! - Fixed-interval clock with pause/resume

pub mod clock;
pub mod input;

pub use clock::{ClockState, SimulationClock};
pub use input::KeyState;
