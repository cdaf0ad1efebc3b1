//! Runner settings
//!
//! Loaded from a JSON file next to the binary; missing or broken files fall
//! back to defaults. Physics tuning lives in `consts`, not here.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_INTERVAL_MS;
use crate::sim::{KeyBindings, RngState};

/// Runner settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed for reproducible runs (None = fresh entropy)
    pub seed: Option<u64>,
    /// Time between frames
    pub frame_interval_ms: u64,
    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_interval_ms: FRAME_INTERVAL_MS,
            keys: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "hen_dash_settings.json";

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Seed for this run; draws one if none is configured
    pub fn rng_state(&self) -> RngState {
        match self.seed {
            Some(seed) => RngState::new(seed),
            None => RngState::from_entropy(),
        }
    }

    /// Parse settings JSON, normalizing key names
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.keys = settings.keys.normalized();
        if settings.frame_interval_ms == 0 {
            log::warn!("frame_interval_ms of 0 replaced with {}", FRAME_INTERVAL_MS);
            settings.frame_interval_ms = FRAME_INTERVAL_MS;
        }
        Ok(settings)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings at {} ({}); using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::error!("Could not write {}: {}", path.display(), e),
            },
            Err(e) => log::error!("Could not serialize settings: {}", e),
        }
    }
}
