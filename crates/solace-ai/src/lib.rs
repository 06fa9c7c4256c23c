//! Conversational model access for Solace.
//!
//! Provides the Gemini client with:
//! - Streaming (SSE) replies exposed as a fragment stream
//! - A `Session` that owns the running turn history for one conversation
//! - Credential resolution from the process environment

pub mod gemini;
pub mod session;
pub mod streaming;

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{ReplyStream, Session};

/// Incremental pieces of one model reply, in arrival order.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, AiError>> + Send>>;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Fixed model identifier this client talks to.
    fn model_name(&self) -> &str;

    /// Open a streaming reply for `history`, whose last entry is the new user turn.
    async fn stream_reply(
        &self,
        system_instruction: &str,
        history: &[Message],
    ) -> Result<FragmentStream, AiError>;

    /// Check that the remote service accepts this client's credential.
    async fn check_reachable(&self) -> Result<(), AiError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// Failure while sending a message or reading its reply.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

/// Failure while creating a session.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("API key not set: export {var}")]
    MissingApiKey { var: String },
    #[error("API key is malformed")]
    InvalidApiKey,
    #[error("HTTP client error: {0}")]
    HttpClient(String),
    #[error("model service unreachable: {0}")]
    Unreachable(#[source] AiError),
}
