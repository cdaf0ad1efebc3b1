//! Session state and the Running/GameOver state machine
//!
//! One `GameSession` owns everything a single game touches. Reset replaces
//! the per-game parts wholesale; only the high score carries over.

use serde::{Deserialize, Serialize};

use super::dash::DashState;
use super::environment::Environment;
use super::phase::SpeedPhase;
use super::player::PlayerState;
use crate::highscores::HighScore;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended, waiting for a restart
    GameOver,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSession {
    /// Simulation tick counter, also the running score
    pub tick: u64,
    pub status: SessionStatus,
    /// Score of the last finished run
    pub score: u64,
    /// Best score this process has seen
    pub high_score: HighScore,
    pub phase: SpeedPhase,
    pub player: PlayerState,
    pub dash: DashState,
    pub environment: Environment,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.status == SessionStatus::GameOver
    }

    /// Running -> GameOver. Returns false (and does nothing) if already over.
    pub fn trigger_game_over(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.status = SessionStatus::GameOver;
        self.player.halt();
        self.score = self.tick;
        let new_best = self.high_score.record(self.score);
        log::info!(
            "Game over at tick {} (score {}, best {}{})",
            self.tick,
            self.score,
            self.high_score.best(),
            if new_best { ", new high score" } else { "" }
        );
        true
    }

    /// GameOver -> Running with a fresh game. Ignored while running.
    pub fn reset(&mut self) -> bool {
        if !self.is_game_over() {
            log::debug!("Reset ignored while running");
            return false;
        }
        *self = Self {
            high_score: self.high_score,
            ..Self::default()
        };
        log::info!("Session reset (best {})", self.high_score.best());
        true
    }
}
