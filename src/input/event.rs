/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// turns them into camera motion.
///
/// # Example
///
/// ```ignore
/// processor.handle_event(
///     InputEvent::Key { key: "KeyW".into(), pressed: true },
///     &mut camera,
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Keyboard key pressed or released.
    Key {
        /// Physical key string in `winit::keyboard::KeyCode` debug format.
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The window lost keyboard focus; all held input is released.
    FocusLost,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

/// Key string for a winit physical key code, as used by keybindings.
#[cfg(feature = "viewer")]
#[must_use]
pub fn key_name(code: winit::keyboard::KeyCode) -> String {
    format!("{code:?}")
}
