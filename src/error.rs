//! Crate-level error types.
//!
//! Camera math itself never fails; these errors come from the loaders and
//! validators that sit in front of it.

use std::fmt;

/// Errors produced by the marchcam crate.
#[derive(Debug)]
pub enum MarchError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Scene JSON parsing failure or missing camera block.
    SceneParse(String),
    /// Options that would produce a degenerate frustum or viewport.
    InvalidOptions(String),
    /// Scene camera vectors that cannot form a camera basis.
    InvalidCamera(String),
}

impl fmt::Display for MarchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::SceneParse(msg) => write!(f, "scene parse error: {msg}"),
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            Self::InvalidCamera(msg) => write!(f, "invalid camera: {msg}"),
        }
    }
}

impl std::error::Error for MarchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MarchError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for MarchError {
    fn from(e: serde_json::Error) -> Self {
        Self::SceneParse(e.to_string())
    }
}
