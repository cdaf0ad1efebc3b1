//! Input capability consumed by the simulation
//!
//! The core only ever asks "is this key held right now?". Hosts implement
//! [`InputSource`] over whatever event stream they have.

use serde::{Deserialize, Serialize};

/// Read-only view of the keys currently held
pub trait InputSource {
    /// `key` is a lowercase key identifier such as `"w"`
    fn is_held(&self, key: &str) -> bool;
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn is_held(&self, key: &str) -> bool {
        (**self).is_held(key)
    }
}

/// Logical key bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub jump: String,
    pub dash_left: String,
    pub dash_right: String,
    pub restart: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            jump: "w".to_string(),
            dash_left: "a".to_string(),
            dash_right: "d".to_string(),
            restart: "r".to_string(),
        }
    }
}

impl KeyBindings {
    /// Lowercase every binding so lookups match the input source's keys
    pub fn normalized(mut self) -> Self {
        for key in [
            &mut self.jump,
            &mut self.dash_left,
            &mut self.dash_right,
            &mut self.restart,
        ] {
            *key = key.to_lowercase();
        }
        self
    }
}
