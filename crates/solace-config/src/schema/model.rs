//! Remote model connection settings.

use serde::{Deserialize, Serialize};

/// Model identifier used for every session.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API credential.
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Model connection configuration.
///
/// The credential itself is never part of the file; only the name of the
/// environment variable that carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub api_key_env: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
    /// Check the model endpoint once at startup so an unreachable service
    /// surfaces as an initialization failure.
    pub verify_on_start: bool,
    pub connect_timeout_secs: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.into(),
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            temperature: 1.0,
            max_output_tokens: 8192,
            verify_on_start: true,
            connect_timeout_secs: 10,
        }
    }
}
