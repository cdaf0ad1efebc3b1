//! Player physics and animation
//!
//! The player never moves on screen horizontally; the world scrolls past.
//! Vertical motion shows up as a camera offset (`camera_y`) that is 0 on the
//! ground and negative while airborne.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Sprite frame to draw this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationFrame {
    /// One of four running frames (0..=3)
    Run(u8),
    Jump,
    Idle,
}

impl Default for AnimationFrame {
    fn default() -> Self {
        AnimationFrame::Run(0)
    }
}

impl AnimationFrame {
    /// Index into the sprite sheet: runs 0-3, jump 4, idle 5
    pub fn index(&self) -> usize {
        match self {
            AnimationFrame::Run(frame) => usize::from(*frame),
            AnimationFrame::Jump => 4,
            AnimationFrame::Idle => 5,
        }
    }
}

/// Player motion state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Positive is upward
    pub vertical_speed: f32,
    /// World scroll speed, set by the speed phase or a dash
    pub horizontal_speed: f32,
    /// Offset from the ground; 0 when grounded, negative while airborne
    pub camera_y: f32,
    /// Accumulated horizontal scroll (parallax only)
    pub camera_x: f32,
    pub is_grounded: bool,
    pub animation: AnimationFrame,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            vertical_speed: 0.0,
            horizontal_speed: 0.0,
            camera_y: 0.0,
            camera_x: 0.0,
            is_grounded: true,
            animation: AnimationFrame::default(),
        }
    }
}

impl PlayerState {
    /// Start a jump if standing on the ground. No air jumps.
    pub fn try_jump(&mut self) -> bool {
        if self.is_grounded {
            self.vertical_speed = JUMP_POWER;
            true
        } else {
            false
        }
    }

    /// Advance one tick: gravity, vertical offset, grounding, horizontal scroll
    pub fn integrate(&mut self) {
        self.vertical_speed -= GRAVITY;
        self.camera_y -= self.vertical_speed;

        self.is_grounded = self.camera_y >= 0.0;
        if self.is_grounded {
            self.camera_y = 0.0;
            self.vertical_speed = 0.0;
        }

        self.camera_x += self.horizontal_speed;
    }

    /// Pick the sprite frame for this tick (no effect on physics)
    pub fn select_animation(&self, tick: u64) -> AnimationFrame {
        if !self.is_grounded {
            AnimationFrame::Jump
        } else if self.horizontal_speed.abs() > RUN_SPEED_THRESHOLD {
            AnimationFrame::Run(((tick / 2) % 4) as u8)
        } else {
            AnimationFrame::Idle
        }
    }

    /// Freeze all motion (game over)
    pub fn halt(&mut self) {
        self.horizontal_speed = 0.0;
        self.vertical_speed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut player = PlayerState::default();
        assert!(player.try_jump());
        player.integrate();
        assert!(!player.is_grounded);
        assert_eq!(player.vertical_speed, 21.0);
        assert_eq!(player.camera_y, -21.0);

        // No air jump
        assert!(!player.try_jump());
        assert_eq!(player.vertical_speed, 21.0);

        let mut ticks = 1;
        while !player.is_grounded {
            player.integrate();
            ticks += 1;
            assert!(ticks < 100, "never landed");
        }
        assert_eq!(player.camera_y, 0.0);
        assert_eq!(player.vertical_speed, 0.0);
        // 21, 19, .., 1 up then -1, .., -21 down
        assert_eq!(ticks, 22);
    }

    #[test]
    fn test_grounded_player_stays_put() {
        let mut player = PlayerState::default();
        for _ in 0..10 {
            player.integrate();
            assert!(player.is_grounded);
            assert_eq!(player.camera_y, 0.0);
        }
    }

    #[test]
    fn test_camera_x_accumulates_scroll() {
        let mut player = PlayerState {
            horizontal_speed: 8.0,
            ..Default::default()
        };
        player.integrate();
        player.integrate();
        assert_eq!(player.camera_x, 16.0);
    }

    #[test]
    fn test_animation_selection() {
        let mut player = PlayerState {
            horizontal_speed: 8.0,
            ..Default::default()
        };
        assert_eq!(player.select_animation(0), AnimationFrame::Run(0));
        assert_eq!(player.select_animation(3), AnimationFrame::Run(1));
        assert_eq!(player.select_animation(7), AnimationFrame::Run(3));
        assert_eq!(player.select_animation(8), AnimationFrame::Run(0));

        player.horizontal_speed = 0.1;
        assert_eq!(player.select_animation(5), AnimationFrame::Idle);
        assert_eq!(AnimationFrame::Idle.index(), 5);

        player.try_jump();
        player.integrate();
        assert_eq!(player.select_animation(5), AnimationFrame::Jump);
        assert_eq!(AnimationFrame::Jump.index(), 4);
    }

    proptest! {
        #[test]
        fn grounded_iff_zero_offset(jumps in proptest::collection::vec(any::<bool>(), 1..200)) {
            let mut player = PlayerState::default();
            for jump in jumps {
                if jump {
                    player.try_jump();
                }
                player.integrate();
                prop_assert_eq!(player.is_grounded, player.camera_y == 0.0);
                prop_assert!(player.camera_y <= 0.0);
            }
        }
    }
}
