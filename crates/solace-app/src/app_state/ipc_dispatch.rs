//! IPC message validation and dispatch from the chat page.

use solace_webview::{IpcMessage, IpcPayload};

use super::core::SolaceApp;
use super::types::MAX_INPUT_LEN;

/// Message kinds the page may send. Anything else is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &["chat_ready", "chat_submit"];

pub(super) fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

/// Extract the text of a `chat_submit` payload, enforcing the size limit.
fn submitted_text(payload: &IpcPayload) -> Option<&str> {
    let text = payload.str_field("text")?;
    if text.len() > MAX_INPUT_LEN {
        tracing::warn!(len = text.len(), max = MAX_INPUT_LEN, "chat_submit rejected: too long");
        return None;
    }
    Some(text)
}

impl SolaceApp {
    /// Handle one IPC body posted by the page.
    pub(super) fn handle_ipc_message(&mut self, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
            return;
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }

        tracing::debug!(kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "chat_ready" => self.resync_page(),
            "chat_submit" => {
                if let Some(text) = submitted_text(&msg.payload) {
                    self.submit_chat(text);
                }
            }
            _ => tracing::warn!(kind = %msg.kind, "Unhandled IPC kind"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use serde_json::json;

    use solace_chat::Conversation;
    use solace_config::SolaceConfig;

    use super::*;

    fn ready_app() -> (SolaceApp, mpsc::Receiver<String>) {
        let mut app = SolaceApp::new(SolaceConfig::default());
        let (tx, rx) = mpsc::channel();
        app.chat_tx = Some(tx);
        app.conversation = Conversation::with_greeting("hello");
        (app, rx)
    }

    #[test]
    fn allowlist() {
        assert!(is_ipc_kind_allowed("chat_ready"));
        assert!(is_ipc_kind_allowed("chat_submit"));
        assert!(!is_ipc_kind_allowed("pty_input"));
        assert!(!is_ipc_kind_allowed(""));
    }

    #[test]
    fn submit_reaches_chat_task() {
        let (mut app, rx) = ready_app();
        app.handle_ipc_message(r#"{"kind":"chat_submit","payload":{"text":"Hi there"}}"#);

        assert_eq!(rx.try_recv().unwrap(), "Hi there");
        assert_eq!(app.conversation.messages().len(), 2);
    }

    #[test]
    fn unknown_kind_and_garbage_are_ignored() {
        let (mut app, rx) = ready_app();
        app.handle_ipc_message(r#"{"kind":"eval","payload":{"text":"Hi"}}"#);
        app.handle_ipc_message("not json");
        app.handle_ipc_message(r#"{"kind":"chat_submit","payload":"Hi"}"#);

        assert!(rx.try_recv().is_err());
        assert_eq!(app.conversation.messages().len(), 1);
    }

    #[test]
    fn oversized_submit_is_rejected() {
        let payload = IpcPayload::Json(json!({ "text": "x".repeat(MAX_INPUT_LEN + 1) }));
        assert!(submitted_text(&payload).is_none());

        let payload = IpcPayload::Json(json!({ "text": "x".repeat(MAX_INPUT_LEN) }));
        assert_eq!(submitted_text(&payload).map(str::len), Some(MAX_INPUT_LEN));
    }

    #[test]
    fn ready_without_view_is_harmless() {
        let (mut app, _rx) = ready_app();
        app.handle_ipc_message(r#"{"kind":"chat_ready","payload":null}"#);
        assert_eq!(app.conversation.messages().len(), 1);
    }
}
