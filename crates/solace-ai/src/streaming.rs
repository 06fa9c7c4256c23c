//! Server-Sent Events (SSE) streaming parser.
//!
//! The Gemini `streamGenerateContent?alt=sse` endpoint delivers one JSON
//! chunk per event. This module turns a reqwest response body into a
//! stream of events and extracts reply text from each one.

use futures_util::{Stream, StreamExt};
use tokio::io::AsyncBufReadExt;
use tokio_util::io::StreamReader;

use crate::AiError;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The event type, when the server names one.
    pub event: Option<String>,
    /// The event data (JSON string).
    pub data: String,
}

/// Line-oriented SSE decoder.
///
/// Feed lines without their terminator; a blank line completes an event.
#[derive(Debug, Default)]
pub struct SseDecoder {
    current_event: Option<String>,
    current_data: String,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line, returning an event if the line completed one.
    pub fn push_line(&mut self, line: &str) -> Option<SseEvent> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            let event = self.current_event.take();
            if self.current_data.is_empty() {
                return None;
            }
            return Some(SseEvent {
                event,
                data: std::mem::take(&mut self.current_data),
            });
        }

        if let Some(event_type) = field_value(line, "event") {
            self.current_event = Some(event_type.to_string());
        } else if let Some(data) = field_value(line, "data") {
            if !self.current_data.is_empty() {
                self.current_data.push('\n');
            }
            self.current_data.push_str(data);
        }
        // id:, retry: and comments carry nothing we use
        None
    }

    /// Flush a trailing event that was not followed by a blank line.
    pub fn finish(&mut self) -> Option<SseEvent> {
        if self.current_data.is_empty() {
            return None;
        }
        Some(SseEvent {
            event: self.current_event.take(),
            data: std::mem::take(&mut self.current_data),
        })
    }
}

/// `data: x` and `data:x` are both valid field syntax.
fn field_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(name)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Turn a streaming HTTP response into a stream of SSE events.
///
/// A transport failure is yielded once as `NetworkError` and ends the stream.
pub fn sse_events(
    response: reqwest::Response,
) -> impl Stream<Item = Result<SseEvent, AiError>> + Send {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(std::io::Error::other));
    let lines = tokio::io::BufReader::new(StreamReader::new(byte_stream)).lines();

    futures_util::stream::unfold(
        Some((lines, SseDecoder::new())),
        |state| async move {
            let (mut lines, mut decoder) = state?;
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if let Some(event) = decoder.push_line(&line) {
                            return Some((Ok(event), Some((lines, decoder))));
                        }
                    }
                    Ok(None) => return decoder.finish().map(|event| (Ok(event), None)),
                    Err(e) => return Some((Err(AiError::NetworkError(e.to_string())), None)),
                }
            }
        },
    )
}

/// Extract the reply text carried by one Gemini stream event.
///
/// Returns `Ok(None)` for events without text (e.g. the final usage chunk).
pub fn fragment_from_event(event: &SseEvent) -> Result<Option<String>, AiError> {
    let data: serde_json::Value = serde_json::from_str(&event.data)
        .map_err(|e| AiError::ParseError(format!("invalid stream chunk: {e}")))?;

    if let Some(error) = data.get("error") {
        let message = error["message"].as_str().unwrap_or("unknown error");
        return Err(AiError::ApiError(message.to_string()));
    }

    let mut chunk = String::new();
    if let Some(candidates) = data["candidates"].as_array() {
        for candidate in candidates {
            if let Some(parts) = candidate["content"]["parts"].as_array() {
                for part in parts {
                    if let Some(t) = part["text"].as_str() {
                        chunk.push_str(t);
                    }
                }
            }
        }
    }

    Ok((!chunk.is_empty()).then_some(chunk))
}
