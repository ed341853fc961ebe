//! Centralized interaction options with TOML preset support.
//!
//! Camera, scene layout, visual feedback, gesture detection, and
//! navigation settings are consolidated here. Options serialize to/from
//! TOML so a session can be reproduced from a single file.

mod camera;
mod feedback;
mod gesture;
mod navigation;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use feedback::FeedbackOptions;
pub use gesture::GestureOptions;
pub use navigation::NavigationOptions;
pub use scene::{BodyOptions, SceneOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gesture]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Viewing camera used for hover rays.
    pub camera: CameraOptions,
    /// Body placement and hit radii.
    pub scene: SceneOptions,
    /// Hover scale and spin.
    pub feedback: FeedbackOptions,
    /// Swipe detection.
    pub gesture: GestureOptions,
    /// Click destinations.
    #[schemars(skip)]
    pub navigation: NavigationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::CooldownMode;
    use crate::target::Target;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[gesture]
swipe_margin = 60.0
cooldown_mode = "legacy"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.gesture.swipe_margin, 60.0);
        assert_eq!(opts.gesture.cooldown_mode, CooldownMode::Legacy);
        // Everything else should be default
        assert_eq!(opts.gesture.cooldown_ms, 2000);
        assert!(opts.gesture.enabled);
        assert_eq!(opts.feedback.hover_scale, 1.2);
        assert_eq!(opts.camera.fovy, 75.0);
    }

    #[test]
    fn default_scene_layout() {
        let scene = SceneOptions::default();
        assert_eq!(scene.body(Target::Earth).position, [0.0, 1.0, 0.0]);
        assert_eq!(scene.body(Target::Earth).radius, 0.8);
        assert_eq!(scene.body(Target::Mars).position, [-3.0, 0.0, 0.0]);
        assert_eq!(scene.body(Target::Moon).position, [3.0, 0.0, 0.0]);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("orrery-options-{}", std::process::id()));
        let path = dir.join("session.toml");
        let mut opts = Options::default();
        opts.gesture.cooldown_ms = 750;
        opts.navigation.base_dir = Some("pages".into());
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("orrery-bad-options-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[gesture]\nswipe_margin = \"wide\"\n").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, OrreryError::OptionsParse(_)));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("scene"));
        assert!(props.contains_key("feedback"));
        assert!(props.contains_key("gesture"));
        assert!(!props.contains_key("navigation"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("eye").is_none());
    }
}
