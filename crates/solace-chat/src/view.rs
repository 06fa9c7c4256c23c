//! Changes published to the renderer.

use serde::Serialize;

use crate::message::ChatMessage;

/// One visible change to the chat view, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewChange {
    /// Replace the whole message list.
    Reset { messages: Vec<ChatMessage> },
    /// A message was added at `index`.
    Appended { index: usize, message: ChatMessage },
    /// The text of the message at `index` changed.
    Replaced { index: usize, text: String },
    /// The input field should be emptied.
    InputCleared,
    /// Send gating and typing indicator.
    Status {
        pending: bool,
        typing: bool,
        /// A session exists; false after a failed start.
        ready: bool,
        can_send: bool,
    },
}
