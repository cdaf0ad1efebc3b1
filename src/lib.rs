//! Hen Dash - side-scrolling endless runner core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, dashes, spawning, collisions, session)
//! - `renderer`: Frame snapshots and the renderer seam
//! - `platform`: Host-side key state and the fixed-interval clock
//! - `settings`: Seed, cadence and key bindings

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use platform::{KeyState, SimulationClock};
pub use renderer::{FrameSnapshot, Renderer};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Wall-clock time between frames (milliseconds)
    pub const FRAME_INTERVAL_MS: u64 = 50;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 2.0;
    /// Upward speed applied by a grounded jump
    pub const JUMP_POWER: f32 = 23.0;
    /// Y coordinate of the ground line (screen space, y grows downward)
    pub const GROUND_LEVEL: f32 = 750.0;

    /// Player sprite is drawn at a fixed screen position
    pub const PLAYER_X: f32 = 600.0;
    pub const PLAYER_SIZE: f32 = 100.0;
    /// Inset applied on every side of the sprite to get the hitbox
    pub const HITBOX_SHRINK: f32 = 20.0;
    /// Below this horizontal speed the grounded player shows the idle frame
    pub const RUN_SPEED_THRESHOLD: f32 = 0.2;

    /// Dash impulse magnitude on the ground / in the air
    pub const DASH_SPEED_GROUNDED: f32 = 100.0;
    pub const DASH_SPEED_AIRBORNE: f32 = 200.0;

    /// Spawn x when the world is scrolling back (speed below `LEFTWARD_SPEED`)
    pub const SPAWN_X_LEFT: f32 = -199.0;
    /// Default spawn x (right edge)
    pub const SPAWN_X_RIGHT: f32 = 1700.0;
    pub const LEFTWARD_SPEED: f32 = -2.0;

    /// World band: entities at or past these x values are pruned
    pub const OBSTACLE_MIN_X: f32 = -100.0;
    pub const CLOUD_MIN_X: f32 = -200.0;
    pub const WORLD_MAX_X: f32 = 1701.0;

    /// Clouds lag behind obstacles by this much per tick (parallax)
    pub const CLOUD_DRIFT: f32 = 3.0;
    /// Minimum distance between consecutive clouds
    pub const CLOUD_SPACING: f32 = 200.0;
}
