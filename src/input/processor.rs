//! Converts raw platform events into camera motion.
//!
//! The `InputProcessor` owns all transient input state (held keys, drag
//! tracking, last cursor position) plus the keybinding map. It is the only
//! thing that sits between raw window events and the camera's motion API;
//! the camera never sees an event type.

use glam::Vec3;
use rustc_hash::FxHashSet;

use super::event::{InputEvent, MouseButton};
use super::mouse::DragState;
use crate::camera::{Camera, MoveDirection};
use crate::options::{CameraOptions, KeybindingOptions, Options};

/// Turns input events into calls on [`Camera`].
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// processor.handle_event(event, &mut camera);
///
/// // Once per frame, before rendering:
/// processor.tick(frame_seconds, &mut camera);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Cursor tracking and drag flag.
    drag: DragState,
    /// Directions whose keys are currently held.
    held: FxHashSet<MoveDirection>,
    /// Key string → direction mapping.
    key_bindings: KeybindingOptions,
    /// Motion multipliers.
    camera_options: CameraOptions,
}

impl InputProcessor {
    /// Create a processor with default bindings and sensitivities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor configured from `options`.
    #[must_use]
    pub fn with_options(options: &Options) -> Self {
        Self {
            key_bindings: options.keybindings.clone(),
            camera_options: options.camera.clone(),
            ..Self::default()
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.drag.mouse_pos
    }

    /// Whether a mouse-look drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Whether the key bound to `direction` is held.
    #[must_use]
    pub fn is_held(&self, direction: MoveDirection) -> bool {
        self.held.contains(&direction)
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Process one event. Returns `true` if the camera moved.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        camera: &mut Camera,
    ) -> bool {
        match event {
            InputEvent::Key { key, pressed } => {
                self.handle_key(&key, pressed);
                false
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    if pressed {
                        self.drag.begin();
                    } else {
                        self.drag.end();
                    }
                }
                false
            }
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(x, y, camera)
            }
            InputEvent::FocusLost => {
                self.held.clear();
                self.drag.end();
                false
            }
        }
    }

    /// Update the held set for a bound key.
    fn handle_key(&mut self, key: &str, pressed: bool) {
        let Some(direction) = self.key_bindings.lookup(key) else {
            return;
        };
        if pressed {
            let _ = self.held.insert(direction);
        } else {
            let _ = self.held.remove(&direction);
        }
    }

    /// Cursor moved; rotate the camera when dragging.
    fn handle_cursor_moved(
        &mut self,
        x: f32,
        y: f32,
        camera: &mut Camera,
    ) -> bool {
        let (delta_x, delta_y) = self.drag.handle_mouse_position(x, y);
        if !self.drag.is_dragging || (delta_x == 0.0 && delta_y == 0.0) {
            return false;
        }
        let scale = self.camera_options.look_speed;
        camera.yaw(delta_x * scale);
        camera.pitch(delta_y * scale);
        true
    }

    /// Sum of held-direction impulses for one frame, without applying it.
    #[must_use]
    pub fn pending_translation(&self, camera: &Camera, dt: f32) -> Vec3 {
        let sum: Vec3 = MoveDirection::ALL
            .iter()
            .filter(|dir| self.held.contains(*dir))
            .map(|dir| camera.impulse(*dir))
            .sum();
        let frame_scale = if self.camera_options.frame_scaled_motion {
            dt
        } else {
            1.0
        };
        sum * self.camera_options.move_speed * frame_scale
    }

    /// Apply one frame of held-key motion. Returns `true` if the camera
    /// moved.
    pub fn tick(&mut self, dt: f32, camera: &mut Camera) -> bool {
        let displacement = self.pending_translation(camera, dt);
        if displacement == Vec3::ZERO {
            return false;
        }
        camera.apply_translation(displacement);
        true
    }
}
