//! Read-only frame snapshots handed to renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::collision::{Rect, player_sprite};
use crate::sim::{Cloud, DashDirection, GameSession};

/// Player sprite placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Screen rectangle (fixed)
    pub rect: Rect,
    /// Sprite sheet index: runs 0-3, jump 4, idle 5
    pub frame: usize,
}

/// Dash bar, present while a dash is active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashView {
    pub active: bool,
    pub direction: DashDirection,
    pub ticks_remaining: u32,
    pub duration: u32,
    /// Fraction of the bar still filled
    pub fill: f32,
    pub label: String,
}

/// Running HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    /// Doubles as the score
    pub tick: u64,
    pub phase: u8,
}

/// Game-over overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverView {
    pub title: String,
    pub prompt: String,
    pub score: u64,
    pub high_score: u64,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub player: PlayerView,
    /// Vertical camera offset; draw world y at `y - camera_y`
    pub camera_y: f32,
    /// Accumulated horizontal scroll, for parallax
    pub camera_x: f32,
    /// World space, before the camera offset
    pub obstacles: Vec<Rect>,
    pub clouds: Vec<Cloud>,
    pub dash: Option<DashView>,
    pub hud: Option<Hud>,
    pub game_over: Option<GameOverView>,
}

impl FrameSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        let dash = &session.dash;
        let dash = dash.active.then(|| DashView {
            active: dash.active,
            direction: dash.direction,
            ticks_remaining: dash.ticks_remaining,
            duration: dash.duration,
            fill: dash.fill(),
            label: dash.direction.label().to_string(),
        });

        let (hud, game_over) = if session.is_game_over() {
            let over = GameOverView {
                title: "GAME OVER".to_string(),
                prompt: "Press R to Restart".to_string(),
                score: session.score,
                high_score: session.high_score.best(),
            };
            (None, Some(over))
        } else {
            let hud = Hud {
                tick: session.tick,
                phase: session.phase.index,
            };
            (Some(hud), None)
        };

        Self {
            player: PlayerView {
                rect: player_sprite(),
                frame: session.player.animation.index(),
            },
            camera_y: session.player.camera_y,
            camera_x: session.player.camera_x,
            obstacles: session
                .environment
                .obstacles
                .iter()
                .map(|o| o.rect)
                .collect(),
            clouds: session.environment.clouds.clone(),
            dash,
            hud,
            game_over,
        }
    }

    /// Obstacle rectangles shifted by the camera, ready to draw
    pub fn screen_obstacles(&self) -> impl Iterator<Item = Rect> + '_ {
        self.obstacles
            .iter()
            .map(|r| r.translated(Vec2::new(0.0, -self.camera_y)))
    }
}
