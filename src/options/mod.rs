//! Post-processing options with TOML preset support.
//!
//! Selection, blending and blur settings are consolidated here. Options
//! serialize to/from TOML for presets, and publish a JSON schema for
//! settings panels.

mod blend;
mod blur;
mod selection;

use std::path::Path;

pub use blend::BlendOptions;
pub use blur::BlurOptions;
use schemars::JsonSchema;
pub use selection::SelectionOptions;
use serde::{Deserialize, Serialize};

use crate::error::PostFxError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[blend]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Selection render-layer settings.
    pub selection: SelectionOptions,
    /// Effect blending settings.
    pub blend: BlendOptions,
    /// Blur material settings.
    pub blur: BlurOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PostFxError::OptionsParse`] for malformed TOML or unknown
    /// enum values.
    pub fn from_toml(content: &str) -> Result<Self, PostFxError> {
        toml::from_str(content)
            .map_err(|e| PostFxError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PostFxError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml`](Self::from_toml).
    pub fn load(path: &Path) -> Result<Self, PostFxError> {
        let content = std::fs::read_to_string(path).map_err(PostFxError::Io)?;
        let options = Self::from_toml(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`PostFxError::OptionsParse`] if serialization fails and
    /// [`PostFxError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PostFxError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PostFxError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PostFxError::Io)?;
        }
        std::fs::write(path, content).map_err(PostFxError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend::BlendFunction;

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
[blend]
function = "soft_light"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.blend.function, BlendFunction::SoftLight);
        // Everything else should be default
        assert_eq!(opts.blend.opacity, 1.0);
        assert_eq!(opts.selection.channel, 10);
        assert!(!opts.selection.exclusive);
        assert_eq!(opts.blur.scale, 1.0);
    }

    #[test]
    fn unknown_blend_function_is_rejected() {
        let err = Options::from_toml("[blend]\nfunction = \"hard_mix\"\n")
            .unwrap_err();
        assert!(matches!(err, PostFxError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("postfx-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.selection.channel = 12;
        opts.blend.function = BlendFunction::Screen;
        opts.blur.kernel = 3.0;

        opts.save(&dir.join("glow.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        assert_eq!(Options::load(&dir.join("glow.toml")).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["glow".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/postfx.toml"))
            .unwrap_err();
        assert!(matches!(err, PostFxError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("selection"));
        assert!(props.contains_key("blend"));
        assert!(props.contains_key("blur"));

        let blend = &props["blend"]["properties"];
        assert!(blend.get("function").is_some());
        assert!(blend.get("opacity").is_some());
    }
}
