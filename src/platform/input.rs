//! Held-key map updated by the host's key events

use std::collections::HashMap;

use crate::sim::InputSource;

/// Which keys are currently held, keyed by lowercase identifier
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down event
    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_lowercase(), true);
    }

    /// Key-up event
    pub fn release(&mut self, key: &str) {
        self.held.insert(key.to_lowercase(), false);
    }

    pub fn set(&mut self, key: &str, held: bool) {
        if held {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl InputSource for KeyState {
    fn is_held(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }
}
