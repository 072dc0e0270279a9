//! Scene-description camera block.
//!
//! Only the camera portion of a scene file is read here; shapes, lights and
//! materials belong to the renderer and are ignored by the parser.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::MarchError;

/// Smallest `|look × up|` (relative to `|look||up|`) accepted by
/// [`SceneCameraData::validate`].
const PARALLEL_EPSILON: f32 = 1e-6;

/// Virtual camera as described by a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneCameraData {
    /// World-space eye position.
    #[serde(alias = "pos")]
    pub position: Vec3,
    /// Forward direction; need not be normalized.
    pub look: Vec3,
    /// Up hint; need not be orthogonal to `look`.
    pub up: Vec3,
    /// Vertical field of view in radians.
    #[serde(rename = "heightAngle", alias = "height_angle")]
    pub height_angle: f32,
}

#[derive(Deserialize)]
struct SceneFile {
    camera: Option<SceneCameraData>,
}

impl SceneCameraData {
    /// Extract the `"camera"` object from a scene JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, MarchError> {
        let scene: SceneFile = serde_json::from_str(content)?;
        scene.camera.ok_or_else(|| {
            MarchError::SceneParse("scene has no \"camera\" object".into())
        })
    }

    /// Load the camera block of a scene JSON file.
    pub fn load(path: &Path) -> Result<Self, MarchError> {
        let content = std::fs::read_to_string(path)?;
        let data = Self::from_json_str(&content)?;
        log::info!("Loaded scene camera from {}", path.display());
        Ok(data)
    }

    /// Reject vectors that cannot produce an orthonormal camera basis.
    ///
    /// The camera itself never checks these; this is the upstream gate.
    pub fn validate(&self) -> Result<(), MarchError> {
        let result = self.check();
        if let Err(e) = &result {
            log::warn!("Rejected scene camera: {e}");
        }
        result
    }

    fn check(&self) -> Result<(), MarchError> {
        if !self.position.is_finite() {
            return Err(MarchError::InvalidCamera(
                "position is not finite".into(),
            ));
        }
        let look_len = self.look.length();
        let up_len = self.up.length();
        if !(look_len > 0.0 && look_len.is_finite()) {
            return Err(MarchError::InvalidCamera(format!(
                "look vector {} has no direction",
                self.look
            )));
        }
        if !(up_len > 0.0 && up_len.is_finite()) {
            return Err(MarchError::InvalidCamera(format!(
                "up vector {} has no direction",
                self.up
            )));
        }
        let sin_scaled = self.look.cross(self.up).length();
        if sin_scaled <= PARALLEL_EPSILON * look_len * up_len {
            return Err(MarchError::InvalidCamera(format!(
                "look {} and up {} are parallel",
                self.look, self.up
            )));
        }
        if !(self.height_angle > 0.0
            && self.height_angle < std::f32::consts::PI)
        {
            return Err(MarchError::InvalidCamera(format!(
                "height angle {} outside (0, pi)",
                self.height_angle
            )));
        }
        Ok(())
    }
}
