use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MarchError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Input-to-motion scaling applied by the input processor.
///
/// These multiply on top of the camera's built-in impulse and rotation
/// sensitivities, so the defaults reproduce the stock feel.
pub struct CameraOptions {
    /// Multiplier on keyboard movement impulses.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// Multiplier on pointer deltas before they become yaw/pitch.
    #[schemars(title = "Look Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub look_speed: f32,
    /// Scale held-key motion by the frame time passed to `tick`.
    #[schemars(skip)]
    pub frame_scaled_motion: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            look_speed: 1.0,
            frame_scaled_motion: true,
        }
    }
}

impl CameraOptions {
    /// Reject speed multipliers that would freeze or invert motion.
    pub fn validate(&self) -> Result<(), MarchError> {
        for (name, value) in
            [("move_speed", self.move_speed), ("look_speed", self.look_speed)]
        {
            if !(value > 0.0 && value.is_finite()) {
                return Err(MarchError::InvalidOptions(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
