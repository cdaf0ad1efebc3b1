//! Procedural obstacles and clouds
//!
//! Both streams spawn at the edge of the world band, scroll with the player's
//! horizontal speed and are pruned on the update after they leave the band. Spawn density
//! and obstacle spacing scale with the speed phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::phase::SpeedPhase;
use super::rng::RandomSource;
use crate::consts::*;

/// An obstacle (world space)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    /// Obstacle of the given size standing on the ground
    pub fn on_ground(x: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, GROUND_LEVEL - height, width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.rect.pos.x
    }

    /// Right edge
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.rect.right()
    }
}

/// A decorative cloud: a row of `bubble_count` circles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub radius: f32,
    pub bubble_count: u32,
    /// Vertical jitter factor for the bubble row
    pub jitter: f32,
    pub pos: Vec2,
}

impl Cloud {
    /// Centers of the bubbles, left to right
    pub fn bubbles(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.bubble_count).map(move |i| {
            // XOR pattern gives the 0, 0, 4, 4, 0, 0, 12 lumpiness
            let lift = (i ^ (i + 2) ^ 2) as f32;
            Vec2::new(
                self.pos.x + self.radius / 2.0 * i as f32,
                self.pos.y + self.jitter * lift,
            )
        })
    }
}

/// Spawn limits for one speed phase, validated once on construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnGate {
    /// Spawn only when a draw in `[1, roll_max]` comes up 1
    pub roll_max: i32,
    /// Live obstacle cap
    pub max_obstacles: usize,
    /// Minimum gap between a new obstacle and the previous one's right edge
    pub min_gap: f32,
}

impl SpawnGate {
    pub fn for_phase(phase: SpeedPhase) -> Self {
        let p = phase.divisor();
        assert!((1..=5).contains(&p), "speed phase {p} out of range");
        let gate = Self {
            roll_max: (100 / p).max(1),
            max_obstacles: 5 * p as usize,
            min_gap: 200.0 / p as f32 + 60.0,
        };
        assert!(gate.roll_max >= 1 && gate.max_obstacles > 0);
        gate
    }
}

/// Where new entities enter the world band
pub fn spawn_x(horizontal_speed: f32) -> f32 {
    if horizontal_speed < LEFTWARD_SPEED {
        SPAWN_X_LEFT
    } else {
        SPAWN_X_RIGHT
    }
}

/// Live obstacles and clouds, in spawn order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop what left the band, then scroll the survivors by the current speed
    pub fn advance(&mut self, horizontal_speed: f32) {
        self.prune();
        for obstacle in &mut self.obstacles {
            obstacle.rect.pos.x -= horizontal_speed;
        }
        for cloud in &mut self.clouds {
            cloud.pos.x -= horizontal_speed - CLOUD_DRIFT;
        }
    }

    /// Remove entities outside the world band, keeping survivors in order
    pub fn prune(&mut self) {
        let before = self.obstacles.len() + self.clouds.len();
        self.obstacles
            .retain(|o| o.x() > OBSTACLE_MIN_X && o.x() < WORLD_MAX_X);
        self.clouds
            .retain(|c| c.pos.x > CLOUD_MIN_X && c.pos.x < WORLD_MAX_X);
        let removed = before - self.obstacles.len() - self.clouds.len();
        if removed > 0 {
            log::trace!("Pruned {} entities", removed);
        }
    }

    /// Maybe spawn one obstacle. Draw order: gate, width, height.
    pub fn spawn_obstacle<R: RandomSource + ?Sized>(
        &mut self,
        phase: SpeedPhase,
        horizontal_speed: f32,
        rng: &mut R,
    ) -> Option<Obstacle> {
        let gate = SpawnGate::for_phase(phase);
        let x = spawn_x(horizontal_speed);

        if rng.int_in(1, gate.roll_max) != 1 {
            return None;
        }
        if self.obstacles.len() >= gate.max_obstacles {
            return None;
        }

        let width = rng.int_in(30, 60) as f32;
        let height = rng.int_in(40, 80) as f32;

        if let Some(last) = self.obstacles.last() {
            if (x - last.trailing_edge()).abs() < gate.min_gap {
                return None;
            }
        }

        let obstacle = Obstacle::on_ground(x, width, height);
        self.obstacles.push(obstacle);
        debug_assert!(
            self.obstacles.len() <= gate.max_obstacles,
            "obstacle cap exceeded"
        );
        log::trace!("Spawned obstacle {:?}", obstacle.rect);
        Some(obstacle)
    }

    /// Maybe spawn one cloud. Draw order: gate, radius, bubbles, jitter, y.
    pub fn spawn_cloud<R: RandomSource + ?Sized>(
        &mut self,
        phase: SpeedPhase,
        horizontal_speed: f32,
        rng: &mut R,
    ) -> Option<Cloud> {
        let gate = SpawnGate::for_phase(phase);
        let x = spawn_x(horizontal_speed);

        if rng.int_in(1, gate.roll_max) != 1 {
            return None;
        }
        if let Some(last) = self.clouds.last() {
            if (x - last.pos.x).abs() < CLOUD_SPACING {
                return None;
            }
        }

        let radius = rng.int_in(30, 60);
        let bubble_count = rng.int_in(4, 7) as u32;
        // Jitter in [floor(-r/4) + 1, ceil(r/4) - 1]
        let jitter = rng.int_in((-radius).div_euclid(4) + 1, (radius + 3) / 4 - 1);
        let y = rng.int_in(50, 300);

        let cloud = Cloud {
            radius: radius as f32,
            bubble_count,
            jitter: jitter as f32,
            pos: Vec2::new(x, y as f32),
        };
        self.clouds.push(cloud);
        log::trace!("Spawned cloud at {:?}", cloud.pos);
        Some(cloud)
    }
}
