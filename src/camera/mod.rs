//! Camera system for the raymarch pass.
//!
//! Turns scene camera data into a view matrix and per-pixel ray
//! directions, and applies keyboard/mouse-driven motion.

/// Camera state, initialization and view-matrix derivation.
pub mod core;
/// Translation impulses and mouse-look rotation.
pub mod motion;
/// Per-pixel ray generation.
pub mod ray;
/// GPU uniform snapshot of the camera.
pub mod uniform;

pub use self::core::Camera;
pub use motion::{MoveDirection, LOOK_SENSITIVITY, MOVE_SENSITIVITY};
pub use uniform::CameraUniform;
