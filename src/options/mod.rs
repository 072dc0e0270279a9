//! Explicit settings consumed by the camera and the input processor.
//!
//! Screen/frustum parameters, motion sensitivities, shader toggles and
//! keybindings live here and serialize to/from TOML. Nothing in the crate
//! reads a process-wide settings object; callers pass [`Options`] (or one
//! of its sections) in.

mod camera;
mod keybindings;
mod render;
mod screen;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use render::{
    RenderOptions, FLAG_AMBIENT_OCCLUSION, FLAG_GAMMA_CORRECTION,
    FLAG_REFLECTION, FLAG_REFRACTION, FLAG_SOFT_SHADOW,
};
use schemars::JsonSchema;
pub use screen::ScreenOptions;
use serde::{Deserialize, Serialize};

use crate::error::MarchError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[screen]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Viewport and frustum settings.
    pub screen: ScreenOptions,
    /// Motion sensitivity multipliers.
    pub camera: CameraOptions,
    /// Shader feature toggles.
    pub render: RenderOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MarchError> {
        let content = std::fs::read_to_string(path).map_err(MarchError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(opts)
    }

    /// Parse options from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, MarchError> {
        toml::from_str(content)
            .map_err(|e| MarchError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MarchError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MarchError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MarchError::Io)?;
        }
        std::fs::write(path, content).map_err(MarchError::Io)
    }

    /// Check everything the camera assumes about its settings.
    pub fn validate(&self) -> Result<(), MarchError> {
        self.screen
            .validate()
            .and_then(|()| self.camera.validate())
            .inspect_err(|e| {
                log::warn!("Rejected options: {e}");
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::MoveDirection;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[screen]
width = 800
height = 600
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.screen.width, 800);
        assert_eq!(opts.screen.height, 600);
        assert_eq!(opts.screen.near_plane, 0.1);
        assert_eq!(opts.screen.far_plane, 100.0);
        assert_eq!(opts.camera, CameraOptions::default());
    }

    #[test]
    fn malformed_toml_is_options_parse_error() {
        let err = Options::from_toml_str("[screen\nwidth = ").unwrap_err();
        assert!(matches!(err, MarchError::OptionsParse(_)));
    }

    #[test]
    fn validate_covers_camera_section() {
        let opts =
            Options::from_toml_str("[camera]\nlook_speed = 0.0\n").unwrap();
        assert!(matches!(
            opts.validate(),
            Err(MarchError::InvalidOptions(_))
        ));
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(MoveDirection::Forward)
        );
        assert_eq!(opts.keybindings.lookup("Space"), Some(MoveDirection::Up));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn custom_keybindings_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
ArrowUp = "forward"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(MoveDirection::Forward)
        );
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("marchcam-options-test");
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.screen.width = 640;
        opts.render.reflection = true;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("screen"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("render"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("move_speed").is_some());
        assert!(camera.get("frame_scaled_motion").is_none());
    }
}
