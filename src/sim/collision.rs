//! Collision detection between the player and obstacles
//!
//! The player's screen position is fixed, so obstacles are moved into screen
//! space (vertical camera offset removed) and tested against a hitbox that is
//! a bit smaller than the sprite.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::environment::Obstacle;
use crate::consts::*;

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Shrink by `margin` on every side
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            pos: self.pos + Vec2::splat(margin),
            size: self.size - Vec2::splat(2.0 * margin),
        }
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    /// Strict overlap; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Where the player sprite is drawn
pub const fn player_sprite() -> Rect {
    Rect::new(PLAYER_X, GROUND_LEVEL - PLAYER_SIZE, PLAYER_SIZE, PLAYER_SIZE)
}

/// Forgiving hitbox inside the sprite: (620, 670, 60, 60)
pub fn player_hitbox() -> Rect {
    player_sprite().inset(HITBOX_SHRINK)
}

/// Obstacle rectangle as it appears on screen for the given camera offset
pub fn to_screen(obstacle: &Obstacle, camera_y: f32) -> Rect {
    obstacle.rect.translated(Vec2::new(0.0, -camera_y))
}

/// Index of the first obstacle the player overlaps, if any
pub fn first_hit(obstacles: &[Obstacle], camera_y: f32) -> Option<usize> {
    let hitbox = player_hitbox();
    obstacles
        .iter()
        .position(|o| hitbox.overlaps(&to_screen(o, camera_y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_hitbox() {
        assert_eq!(player_hitbox(), Rect::new(620.0, 670.0, 60.0, 60.0));
    }

    #[test]
    fn test_overlap_example() {
        let player = Rect::new(620.0, 670.0, 60.0, 60.0);
        let obstacle = Rect::new(600.0, 660.0, 60.0, 70.0);
        assert!(player.overlaps(&obstacle));
        assert!(obstacle.overlaps(&player));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(9.9, 9.9, 10.0, 10.0)));
    }

    #[test]
    fn test_first_hit_on_ground() {
        let obstacles = [
            Obstacle::on_ground(1000.0, 40.0, 60.0),
            Obstacle::on_ground(650.0, 40.0, 60.0),
            Obstacle::on_ground(660.0, 40.0, 60.0),
        ];
        assert_eq!(first_hit(&obstacles, 0.0), Some(1));
        assert_eq!(first_hit(&obstacles[..1], 0.0), None);
    }

    #[test]
    fn test_jumping_clears_obstacle() {
        // Obstacle top at 690; hitbox bottom at 730
        let obstacles = [Obstacle::on_ground(640.0, 40.0, 60.0)];
        assert_eq!(first_hit(&obstacles, 0.0), Some(0));
        // 60 up: obstacle top drawn at 750, below the hitbox
        assert_eq!(first_hit(&obstacles, -60.0), None);
        // 30 up: still clipping
        assert_eq!(first_hit(&obstacles, -30.0), Some(0));
    }
}
