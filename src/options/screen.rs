use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MarchError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Screen", inline)]
#[serde(default)]
/// Viewport and frustum settings consumed at camera initialization.
pub struct ScreenOptions {
    /// Viewport width in pixels.
    #[schemars(title = "Width", range(min = 1))]
    pub width: u32,
    /// Viewport height in pixels.
    #[schemars(title = "Height", range(min = 1))]
    pub height: u32,
    /// Near clipping plane distance.
    #[schemars(title = "Near Plane", range(min = 0.001, max = 10.0), extend("step" = 0.01))]
    pub near_plane: f32,
    /// Far clipping plane distance.
    #[schemars(title = "Far Plane", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub far_plane: f32,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}

impl ScreenOptions {
    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Reject a zero-sized viewport or a frustum without `0 < near < far`.
    pub fn validate(&self) -> Result<(), MarchError> {
        if self.width == 0 || self.height == 0 {
            return Err(MarchError::InvalidOptions(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.near_plane > 0.0 && self.near_plane < self.far_plane) {
            return Err(MarchError::InvalidOptions(format!(
                "expected 0 < near < far, got near={} far={}",
                self.near_plane, self.far_plane
            )));
        }
        if !self.far_plane.is_finite() {
            return Err(MarchError::InvalidOptions(
                "far plane must be finite".into(),
            ));
        }
        Ok(())
    }
}
