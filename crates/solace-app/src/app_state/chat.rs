//! Chat runtime management, event polling, and page updates.

use solace_chat::ViewChange;

use super::chat_task::chat_task;
use super::core::SolaceApp;
use super::types::ChatEvent;

/// IPC kind and payload for one view change.
pub(super) fn view_change_ipc(change: &ViewChange) -> (&'static str, serde_json::Value) {
    match change {
        ViewChange::Reset { messages } => ("chat_reset", serde_json::json!({ "messages": messages })),
        ViewChange::Appended { index, message } => (
            "chat_append",
            serde_json::json!({ "index": index, "message": message }),
        ),
        ViewChange::Replaced { index, text } => (
            "chat_replace",
            serde_json::json!({ "index": index, "text": text }),
        ),
        ViewChange::InputCleared => ("chat_input_cleared", serde_json::Value::Null),
        ViewChange::Status {
            pending,
            typing,
            ready,
            can_send,
        } => (
            "chat_status",
            serde_json::json!({
                "pending": pending,
                "typing": typing,
                "ready": ready,
                "can_send": can_send,
            }),
        ),
    }
}

impl SolaceApp {
    /// Start the async chat task and its channels, once.
    pub(super) fn ensure_chat_runtime(&mut self) {
        if self.chat_tx.is_some() {
            return;
        }

        if self.tokio_runtime.is_none() {
            match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
            {
                Ok(rt) => self.tokio_runtime = Some(rt),
                Err(e) => {
                    tracing::error!("Failed to create tokio runtime: {e}");
                    self.conversation
                        .session_failed(self.config.persona.init_failure_message.clone());
                    self.flush_view_changes();
                    return;
                }
            }
        }
        let Some(rt) = self.tokio_runtime.as_ref() else {
            return;
        };

        let (user_tx, user_rx) = std::sync::mpsc::channel::<String>();
        let (event_tx, event_rx) = std::sync::mpsc::channel::<ChatEvent>();
        self.chat_tx = Some(user_tx);
        self.chat_rx = Some(event_rx);

        let model = self.config.model.clone();
        let system_instruction = self.config.persona.system_instruction.clone();
        rt.spawn(chat_task(model, system_instruction, user_rx, event_tx));
        tracing::info!(model = %self.config.model.name, "Chat task started");
    }

    /// Apply events from the chat task to the conversation (non-blocking).
    /// Returns the view changes published to the page, in order.
    ///
    /// Each event is published before the next is applied, so every
    /// fragment reaches the page as its own `chat_replace`. Fragments that
    /// arrive within one tick may still share a paint.
    pub(super) fn poll_chat(&mut self) -> Vec<ViewChange> {
        let Some(rx) = self.chat_rx.as_ref() else {
            return Vec::new();
        };
        let events: Vec<ChatEvent> = rx.try_iter().collect();

        let mut published = Vec::new();
        for event in events {
            self.apply_chat_event(event);
            published.extend(self.flush_view_changes());
        }
        published
    }

    pub(super) fn apply_chat_event(&mut self, event: ChatEvent) {
        let persona = &self.config.persona;
        match event {
            ChatEvent::Ready { model } => {
                tracing::info!(model = %model, "Chat session ready");
                self.conversation.session_ready(persona.greeting.clone());
                self.model_name = Some(model);
                self.send_header();
            }
            ChatEvent::InitFailed(cause) => {
                tracing::warn!(cause = %cause, "Chat session unavailable");
                self.conversation
                    .session_failed(persona.init_failure_message.clone());
            }
            ChatEvent::ReplyStarted => self.conversation.begin_reply(),
            ChatEvent::Fragment(text) => self.conversation.apply_fragment(&text),
            ChatEvent::ReplyDone => self.conversation.finish_reply(),
            ChatEvent::ReplyFailed(cause) => {
                tracing::warn!(cause = %cause, "Reply failed");
                self.conversation
                    .fail_reply(persona.send_failure_message.clone());
            }
        }
    }

    /// Accept text from the page. Returns whether a send was started.
    pub(super) fn submit_chat(&mut self, text: &str) -> bool {
        self.conversation.set_input(text);
        let accepted = match self.conversation.submit() {
            Some(message) => {
                let delivered = self
                    .chat_tx
                    .as_ref()
                    .is_some_and(|tx| tx.send(message).is_ok());
                if !delivered {
                    tracing::warn!("Chat task is gone; failing the send");
                    self.conversation
                        .fail_reply(self.config.persona.send_failure_message.clone());
                }
                delivered
            }
            None => {
                // The page keeps its own copy of refused input.
                self.conversation.set_input(String::new());
                false
            }
        };
        self.flush_view_changes();
        accepted
    }

    /// The page (re)loaded: send it everything.
    pub(super) fn resync_page(&mut self) {
        self.send_header();
        self.conversation.resync();
        self.flush_view_changes();
    }

    /// Forward all pending view changes to the page.
    pub(super) fn flush_view_changes(&mut self) -> Vec<ViewChange> {
        let changes = self.conversation.drain_changes();
        for change in &changes {
            let (kind, payload) = view_change_ipc(change);
            self.send_chat_ipc(kind, &payload);
        }
        changes
    }

    fn send_header(&self) {
        let persona = &self.config.persona;
        self.send_chat_ipc(
            "chat_header",
            &serde_json::json!({
                "name": persona.name,
                "tagline": persona.tagline,
                "placeholder": persona.input_placeholder,
                "model": self.model_name,
            }),
        );
    }

    fn send_chat_ipc(&self, kind: &str, payload: &serde_json::Value) {
        if let Some(ref view) = self.chat_view {
            if let Err(e) = view.send_ipc(kind, payload) {
                tracing::warn!(kind, error = %e, "Failed to send chat IPC");
            }
        }
    }
}
