//! Input handling: event types, drag tracking, and the input processor
//! that converts raw window events into camera motion.

/// Platform-agnostic input events.
pub mod event;
/// Cursor position and drag tracking.
pub(crate) mod mouse;
/// Converts raw events into camera motion.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
