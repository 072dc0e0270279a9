// -- Lint policy ---------------------------------------------------------
// Lint levels live in Cargo.toml; these are the ones not covered there.

// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]

//! Camera core for an interactive raymarching renderer.
//!
//! Converts a scene-described virtual camera into the view matrix and
//! per-pixel ray directions a raymarch shader needs, and maps keyboard and
//! mouse input onto camera motion.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - camera state, view matrix, ray directions, motion
//! - [`input::InputProcessor`] - turns platform events into camera motion
//! - [`options::Options`] - screen, sensitivity, render toggles, keybindings
//! - [`scene::SceneCameraData`] - the camera block of a scene file
//!
//! # Threading
//!
//! Everything is synchronous and runs on the render/input thread. Ray
//! generation takes `&self`, so a frame's rays may be produced in parallel
//! (see [`camera::Camera::ray_grid`]) as long as no motion is applied while
//! that happens.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;

pub use camera::{Camera, CameraUniform, MoveDirection};
pub use error::MarchError;
pub use input::{InputEvent, InputProcessor, MouseButton};
pub use options::Options;
pub use scene::SceneCameraData;
