//! Where Solace keeps its settings file.

use std::path::{Path, PathBuf};

use solace_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// `<os config dir>/solace/config.toml`.
pub fn settings_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("solace").join("config.toml"))
        .ok_or_else(|| {
            ConfigError::ParseError("this platform has no per-user config directory for Solace".into())
        })
}

/// Write the commented settings template to `path`, creating its directory.
pub fn write_settings_template(path: &Path) -> Result<(), ConfigError> {
    let seed = |e: std::io::Error| {
        ConfigError::ParseError(format!("cannot seed Solace settings at {}: {e}", path.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(seed)?;
    }
    std::fs::write(path, default_config_toml()).map_err(seed)?;

    info!(path = %path.display(), "Solace settings template written");
    Ok(())
}
