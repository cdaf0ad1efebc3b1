//! Rendering seam
//!
//! The simulation never draws. Each frame the clock captures a read-only
//! [`FrameSnapshot`] and hands it to a [`Renderer`].

pub mod json;
pub mod snapshot;

pub use json::JsonLinesRenderer;
pub use snapshot::{DashView, FrameSnapshot, GameOverView, Hud, PlayerView};

/// Consumes one snapshot per frame
pub trait Renderer {
    fn render(&mut self, frame: &FrameSnapshot);
}

/// Renderer that only logs a one-line summary per frame
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameSnapshot) {
        if let Some(over) = &frame.game_over {
            log::trace!("{} | score {} | best {}", over.title, over.score, over.high_score);
            return;
        }
        if let Some(hud) = &frame.hud {
            log::trace!(
                "tick {} phase {} | frame {} | cam_y {} | {} obstacles, {} clouds{}",
                hud.tick,
                hud.phase,
                frame.player.frame,
                frame.camera_y,
                frame.obstacles.len(),
                frame.clouds.len(),
                frame
                    .dash
                    .as_ref()
                    .map(|d| format!(" | {} ({:.0}%)", d.label, d.fill * 100.0))
                    .unwrap_or_default()
            );
        }
    }
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn render(&mut self, frame: &FrameSnapshot) {
        (**self).render(frame);
    }
}
