//! ChatClient trait implementation for GeminiClient (streaming + reachability check).

use async_trait::async_trait;
use futures_util::StreamExt;
use tracing::debug;

use crate::streaming::{fragment_from_event, sse_events};
use crate::{AiError, ChatClient, FragmentStream, Message};

use super::client::GeminiClient;

#[async_trait]
impl ChatClient for GeminiClient {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn stream_reply(
        &self,
        system_instruction: &str,
        history: &[Message],
    ) -> Result<FragmentStream, AiError> {
        let body = self.build_request_body(system_instruction, history);

        debug!(
            model = %self.config.model,
            turns = history.len(),
            "Gemini API streaming request"
        );

        let response = self
            .http
            .post(self.stream_url())
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let response = check_status(response).await?;

        let fragments = sse_events(response).filter_map(|event| async move {
            match event {
                Ok(event) => fragment_from_event(&event).transpose(),
                Err(e) => Some(Err(e)),
            }
        });

        Ok(Box::pin(fragments))
    }

    async fn check_reachable(&self) -> Result<(), AiError> {
        debug!(model = %self.config.model, "Gemini reachability check");

        let response = self
            .http
            .get(self.model_url())
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(map_transport_error)?;

        check_status(response).await.map(|_| ())
    }
}

fn map_transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AiError> {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(AiError::RateLimited);
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
    }
    Ok(response)
}
