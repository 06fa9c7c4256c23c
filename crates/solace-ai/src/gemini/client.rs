//! Gemini API client struct and request building.

use crate::{InitError, Message};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, InitError> {
        // No overall timeout: a reply streams for as long as the model writes.
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| InitError::HttpClient(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn model_url(&self) -> String {
        format!("{}/{}", GEMINI_API_BASE, self.config.model)
    }

    pub(crate) fn stream_url(&self) -> String {
        format!("{}:streamGenerateContent?alt=sse", self.model_url())
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(
        &self,
        system_instruction: &str,
        history: &[Message],
    ) -> serde_json::Value {
        let contents: Vec<_> = history
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role.as_str(),
                    "parts": [{ "text": msg.text }]
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_output_tokens,
                "temperature": self.config.temperature,
            }
        });

        if !system_instruction.is_empty() {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system_instruction }]
            });
        }

        body
    }
}
