//! Randomized dash events
//!
//! While idle, every tick rolls for a dash. An active dash shows the player a
//! direction and a countdown; pressing that direction's key (or running out
//! of time) resolves it into a strong one-tick horizontal impulse.

use serde::{Deserialize, Serialize};

use super::input::{InputSource, KeyBindings};
use super::phase::SpeedPhase;
use super::player::PlayerState;
use super::rng::RandomSource;
use crate::consts::*;

/// Direction the dash asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashDirection {
    #[default]
    Left,
    Right,
}

impl DashDirection {
    /// 0 = Left, 1 = Right
    pub fn from_draw(draw: i32) -> Self {
        if draw == 0 {
            DashDirection::Left
        } else {
            DashDirection::Right
        }
    }

    pub fn as_unit(&self) -> f32 {
        match self {
            DashDirection::Left => 0.0,
            DashDirection::Right => 1.0,
        }
    }

    /// Key that resolves a dash in this direction
    pub fn key<'a>(&self, keys: &'a KeyBindings) -> &'a str {
        match self {
            DashDirection::Left => &keys.dash_left,
            DashDirection::Right => &keys.dash_right,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashDirection::Left => "Dash Time! <- Left",
            DashDirection::Right => "Dash Time! -> Right",
        }
    }
}

/// Roll and duration bounds for one speed phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashOdds {
    /// A dash starts when a draw in `[1, trigger_max]` comes up 1
    pub trigger_max: i32,
    pub min_duration: i32,
    pub max_duration: i32,
}

impl DashOdds {
    pub fn for_phase(phase: SpeedPhase) -> Self {
        let p = phase.divisor();
        assert!(p >= 1, "speed phase index must be at least 1");
        // 100 / (phase / 2)
        let odds = Self {
            trigger_max: (200 / p).max(1),
            min_duration: (60 + p - 1) / p,
            max_duration: 150 / p,
        };
        assert!(
            odds.min_duration >= 1 && odds.min_duration <= odds.max_duration,
            "bad dash duration bounds {odds:?}"
        );
        odds
    }
}

/// Something the dash controller did this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashEvent {
    Started {
        direction: DashDirection,
        duration: u32,
    },
    Resolved {
        direction: DashDirection,
        speed: f32,
    },
}

/// Dash state machine (Idle when `active == false`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashState {
    pub active: bool,
    pub direction: DashDirection,
    /// Total ticks, fixed when the dash starts
    pub duration: u32,
    /// Counts down from `duration` to 0
    pub ticks_remaining: u32,
}

impl DashState {
    pub fn is_idle(&self) -> bool {
        !self.active && self.ticks_remaining == 0
    }

    /// Fraction of the countdown left (1.0 at start)
    pub fn fill(&self) -> f32 {
        if self.duration == 0 {
            0.0
        } else {
            self.ticks_remaining as f32 / self.duration as f32
        }
    }

    /// Horizontal speed a resolving dash produces
    pub fn resolution_speed(direction: DashDirection, is_grounded: bool) -> f32 {
        let magnitude = if is_grounded {
            DASH_SPEED_GROUNDED
        } else {
            DASH_SPEED_AIRBORNE
        };
        -magnitude + 2.0 * magnitude * direction.as_unit()
    }

    /// Advance one tick. A resolution overwrites `player.horizontal_speed`.
    pub fn update<I, R>(
        &mut self,
        phase: SpeedPhase,
        player: &mut PlayerState,
        input: &I,
        keys: &KeyBindings,
        rng: &mut R,
    ) -> Option<DashEvent>
    where
        I: InputSource + ?Sized,
        R: RandomSource + ?Sized,
    {
        if !self.active {
            debug_assert!(self.is_idle(), "idle dash with ticks left: {self:?}");
            let odds = DashOdds::for_phase(phase);
            if rng.int_in(1, odds.trigger_max) != 1 {
                return None;
            }
            return Some(self.start(odds, rng));
        }

        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);

        if input.is_held(self.direction.key(keys)) || self.ticks_remaining == 0 {
            let speed = Self::resolution_speed(self.direction, player.is_grounded);
            player.horizontal_speed = speed;
            self.active = false;
            self.ticks_remaining = 0;
            log::debug!("Dash resolved {:?} at speed {}", self.direction, speed);
            return Some(DashEvent::Resolved {
                direction: self.direction,
                speed,
            });
        }

        debug_assert!(self.ticks_remaining <= self.duration);
        None
    }

    fn start<R: RandomSource + ?Sized>(&mut self, odds: DashOdds, rng: &mut R) -> DashEvent {
        let duration = rng.int_in(odds.min_duration, odds.max_duration);
        let direction = DashDirection::from_draw(rng.int_in(0, 1));
        debug_assert!(duration > 0, "dash duration must be positive");

        self.active = true;
        self.direction = direction;
        self.duration = duration as u32;
        self.ticks_remaining = self.duration;

        log::debug!("Dash started {:?} for {} ticks", direction, duration);
        DashEvent::Started {
            direction,
            duration: self.duration,
        }
    }
}
