//! Gemini API client configuration.

use std::time::Duration;

use crate::InitError;

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub connect_timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("temperature", &self.temperature)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.5-flash".to_string(),
            max_output_tokens: 8192,
            temperature: 1.0,
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Create config from the credential stored in environment variable `var`.
    ///
    /// An unset variable is `MissingApiKey`; a blank value or one containing
    /// whitespace is `InvalidApiKey`.
    pub fn from_env(var: &str) -> Result<Self, InitError> {
        let key = std::env::var(var).map_err(|_| InitError::MissingApiKey {
            var: var.to_string(),
        })?;
        Self::from_key(key)
    }

    /// Validate a raw credential and build a config from it.
    pub fn from_key(key: impl Into<String>) -> Result<Self, InitError> {
        let key = key.into();
        if key.is_empty() || key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InitError::InvalidApiKey);
        }
        Ok(Self::new(key))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}
