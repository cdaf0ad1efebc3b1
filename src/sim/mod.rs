//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected random source only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod dash;
pub mod environment;
pub mod input;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_hit, player_hitbox, player_sprite};
pub use dash::{DashDirection, DashEvent, DashOdds, DashState};
pub use environment::{Cloud, Environment, Obstacle, SpawnGate};
pub use input::{InputSource, KeyBindings};
pub use phase::SpeedPhase;
pub use player::{AnimationFrame, PlayerState};
pub use rng::{RandomSource, RngState};
pub use state::{GameSession, SessionStatus};
pub use tick::{TickOutcome, step};
