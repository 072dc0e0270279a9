use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::MoveDirection;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping key codes to movement directions.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"Space"`, `"ControlLeft"`, etc.
pub struct KeybindingOptions {
    /// Maps key string → direction (e.g. `"KeyW"` → `Forward`).
    pub bindings: HashMap<String, MoveDirection>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), MoveDirection::Forward),
            ("KeyS".into(), MoveDirection::Backward),
            ("KeyA".into(), MoveDirection::Left),
            ("KeyD".into(), MoveDirection::Right),
            ("Space".into(), MoveDirection::Up),
            ("ControlLeft".into(), MoveDirection::Down),
            ("ControlRight".into(), MoveDirection::Down),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the direction bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveDirection> {
        self.bindings.get(key).copied()
    }
}
