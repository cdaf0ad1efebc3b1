//! Fixed-interval simulation clock
//!
//! Owns the session and the shared random source, runs one step per frame
//! and hands every frame (running or not) to the renderer. The host either
//! calls [`SimulationClock::tick`] from its own timer or lets
//! [`SimulationClock::run`] sleep between frames.

use std::thread;
use std::time::{Duration, Instant};

use rand_pcg::Pcg32;

use crate::renderer::{FrameSnapshot, Renderer};
use crate::settings::Settings;
use crate::sim::{GameSession, InputSource, KeyBindings, RandomSource, TickOutcome, step};

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Running,
    /// Timer suspended; ticks are ignored until resumed
    Paused,
    /// Loop ends after the current frame
    Stopped,
}

/// Drives the simulation at a fixed cadence
#[derive(Debug)]
pub struct SimulationClock<R = Pcg32> {
    session: GameSession,
    rng: R,
    keys: KeyBindings,
    interval: Duration,
    state: ClockState,
    /// Frames rendered (keeps counting through game over)
    frames: u64,
}

impl SimulationClock<Pcg32> {
    /// Clock seeded and configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let rng_state = settings.rng_state();
        log::info!(
            "Simulation clock: seed {}, {} ms per frame",
            rng_state.seed,
            settings.frame_interval_ms
        );
        Self::new(
            rng_state.to_rng(),
            settings.keys.clone(),
            settings.frame_interval(),
        )
    }
}

impl<R: RandomSource> SimulationClock<R> {
    pub fn new(rng: R, keys: KeyBindings, interval: Duration) -> Self {
        Self {
            session: GameSession::new(),
            rng,
            keys,
            interval,
            state: ClockState::Running,
            frames: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_paused(&self) -> bool {
        self.state == ClockState::Paused
    }

    pub fn is_stopped(&self) -> bool {
        self.state == ClockState::Stopped
    }

    /// Suspend the timer (e.g. window hidden). No step is skipped or repeated.
    pub fn pause(&mut self) {
        if self.state == ClockState::Running {
            log::info!("Clock paused at frame {}", self.frames);
            self.state = ClockState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == ClockState::Paused {
            log::info!("Clock resumed at frame {}", self.frames);
            self.state = ClockState::Running;
        }
    }

    pub fn stop(&mut self) {
        self.state = ClockState::Stopped;
    }

    /// Restart after game over. No-op while running.
    pub fn reset(&mut self) -> bool {
        self.session.reset()
    }

    /// Advance one frame and render it. Returns `None` while paused or stopped.
    pub fn tick<I, D>(&mut self, input: &I, renderer: &mut D) -> Option<TickOutcome>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
    {
        if self.state != ClockState::Running {
            return None;
        }

        if self.session.is_game_over() && input.is_held(&self.keys.restart) {
            self.session.reset();
        }

        let outcome = step(&mut self.session, input, &self.keys, &mut self.rng);
        self.frames += 1;

        renderer.render(&FrameSnapshot::capture(&self.session));
        Some(outcome)
    }

    /// Run frames until stopped, sleeping out the rest of each interval.
    ///
    /// `host` runs before every frame (also while paused) to update input and
    /// pause, resume or stop the clock.
    pub fn run<I, D, H>(&mut self, input: &mut I, renderer: &mut D, mut host: H)
    where
        I: InputSource,
        D: Renderer + ?Sized,
        H: FnMut(&mut Self, &mut I),
    {
        log::info!("Clock running");
        while !self.is_stopped() {
            let frame_start = Instant::now();
            host(&mut *self, &mut *input);
            if self.is_stopped() {
                break;
            }
            self.tick(&*input, renderer);
            thread::sleep(self.interval.saturating_sub(frame_start.elapsed()));
        }
        log::info!("Clock stopped after {} frames", self.frames);
    }
}
