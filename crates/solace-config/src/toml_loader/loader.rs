//! Reading Solace settings from disk.

use std::io::ErrorKind;
use std::path::Path;

use solace_common::ConfigError;
use tracing::{info, warn};

use crate::schema::SolaceConfig;
use crate::validation;

use super::paths::{settings_path, write_settings_template};

/// Read Solace settings from `path`.
///
/// Missing keys take their defaults. A missing file is `FileNotFound`.
/// Validation problems are logged and the parsed settings are returned.
pub fn load_from_path(path: &Path) -> Result<SolaceConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read Solace settings at {}: {e}",
                path.display()
            )));
        }
    };

    let config: SolaceConfig = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!("{} is not valid Solace settings: {e}", path.display()))
    })?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), error = %e, "Solace settings need attention");
    }

    info!(path = %path.display(), model = %config.model.name, "Solace settings loaded");
    Ok(config)
}

/// Read the per-user settings file (`<config dir>/solace/config.toml`).
///
/// On first launch the commented template is written there and the
/// built-in defaults are used.
pub fn load_default() -> Result<SolaceConfig, ConfigError> {
    load_or_seed(&settings_path()?)
}

/// Read `path`, seeding it with the template when it does not exist yet.
/// A template that cannot be written is logged; the defaults still apply.
pub(super) fn load_or_seed(path: &Path) -> Result<SolaceConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "First launch; seeding Solace settings");
            if let Err(e) = write_settings_template(path) {
                warn!(error = %e, "Starting with built-in settings");
            }
            Ok(SolaceConfig::default())
        }
        other => other,
    }
}
