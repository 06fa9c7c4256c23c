//! Solace configuration system.
//!
//! Provides TOML-based configuration for the model connection, the
//! companion persona, the window, and logging. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use solace_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{SolaceConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use solace_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<SolaceConfig, ConfigError> {
    load_config_from(None)
}

/// Load config from an explicit path override, or the platform default.
///
/// Unlike [`toml_loader::load_from_path`], validation failures are errors here.
pub fn load_config_from(path: Option<&Path>) -> Result<SolaceConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SolaceConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = SolaceConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"model\""));
        assert!(json.contains("\"persona\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"gemini-2.5-flash\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = SolaceConfig::default();
        let json = config_to_json(&config);
        let parsed: SolaceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model.name, "gemini-2.5-flash");
        assert_eq!(parsed.persona.name, "Solace");
        assert_eq!(parsed.window.width, 480);
    }

    #[test]
    fn load_config_from_missing_override_is_file_not_found() {
        let result = load_config_from(Some(Path::new("/tmp/solace_missing_override.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[model]\ntemperature = 5.0\n").unwrap();

        let result = load_config_from(Some(&path));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn load_config_from_accepts_valid_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\ntitle = \"Solace Dev\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.window.title, "Solace Dev");
        assert_eq!(config.model.api_key_env, "API_KEY");
    }
}
