use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bit set in [`RenderOptions::flags`] when gamma correction is on.
pub const FLAG_GAMMA_CORRECTION: u32 = 1 << 0;
/// Bit set when soft shadows are on.
pub const FLAG_SOFT_SHADOW: u32 = 1 << 1;
/// Bit set when reflections are on.
pub const FLAG_REFLECTION: u32 = 1 << 2;
/// Bit set when refraction is on.
pub const FLAG_REFRACTION: u32 = 1 << 3;
/// Bit set when ambient occlusion is on.
pub const FLAG_AMBIENT_OCCLUSION: u32 = 1 << 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Render", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Shader feature toggles forwarded to the raymarch pass.
pub struct RenderOptions {
    /// Apply gamma correction to the final color.
    #[schemars(title = "Gamma Correction")]
    pub gamma_correction: bool,
    /// Soft shadows from penumbra estimation.
    #[schemars(title = "Soft Shadow")]
    pub soft_shadow: bool,
    /// Mirror reflections.
    #[schemars(title = "Reflection")]
    pub reflection: bool,
    /// Refraction through transparent shapes.
    #[schemars(title = "Refraction")]
    pub refraction: bool,
    /// Distance-field ambient occlusion.
    #[schemars(title = "Ambient Occlusion")]
    pub ambient_occlusion: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            gamma_correction: true,
            soft_shadow: true,
            reflection: false,
            refraction: false,
            ambient_occlusion: false,
        }
    }
}

impl RenderOptions {
    /// Pack the toggles into the bitmask uploaded alongside the camera.
    #[must_use]
    pub fn flags(&self) -> u32 {
        [
            (self.gamma_correction, FLAG_GAMMA_CORRECTION),
            (self.soft_shadow, FLAG_SOFT_SHADOW),
            (self.reflection, FLAG_REFLECTION),
            (self.refraction, FLAG_REFRACTION),
            (self.ambient_occlusion, FLAG_AMBIENT_OCCLUSION),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .fold(0, |acc, (_, bit)| acc | bit)
    }
}
