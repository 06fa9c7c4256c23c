//! Conversation state and the reply streaming state machine.
//!
//! `Idle -> Sending -> Streaming -> Idle`, or `-> Failed` when a send
//! breaks. `Failed` accepts input exactly like `Idle`.

use tracing::{debug, warn};

use crate::message::{ChatMessage, ChatRole};
use crate::view::ViewChange;

#[cfg(test)]
mod tests;

/// Where the conversation is in the send cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A message was submitted; no reply has started yet.
    Sending,
    /// Reply fragments are being folded into the placeholder.
    Streaming,
    /// Idle after a failed send. Reported by `phase()` until the next
    /// submit; input and submits are accepted exactly as in `Idle`.
    Failed,
}

/// Handle to the in-progress model message.
#[derive(Debug)]
struct StreamSlot {
    index: usize,
    accumulated: String,
}

/// Messages, input and send gating for one chat view.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    input_text: String,
    pending: bool,
    phase: Phase,
    session_ready: bool,
    slot: Option<StreamSlot>,
    changes: Vec<ViewChange>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// An empty conversation waiting for its session.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input_text: String::new(),
            pending: false,
            phase: Phase::Idle,
            session_ready: false,
            slot: None,
            changes: Vec::new(),
        }
    }

    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut conversation = Self::new();
        conversation.session_ready(greeting);
        conversation
    }

    pub fn with_init_failure(message: impl Into<String>) -> Self {
        let mut conversation = Self::new();
        conversation.session_failed(message);
        conversation
    }

    /// The session exists: show the greeting and allow sending.
    pub fn session_ready(&mut self, greeting: impl Into<String>) {
        self.session_ready = true;
        self.reset_to(ChatMessage::model(greeting));
    }

    /// The session could not be created: show only `message`, and refuse
    /// every submit from now on.
    pub fn session_failed(&mut self, message: impl Into<String>) {
        self.session_ready = false;
        self.reset_to(ChatMessage::model(message));
    }

    fn reset_to(&mut self, message: ChatMessage) {
        self.messages = vec![message];
        self.pending = false;
        self.phase = Phase::Idle;
        self.slot = None;
        self.changes.push(ViewChange::Reset {
            messages: self.messages.clone(),
        });
        self.push_status();
    }

    // -- Input --

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        self.push_status();
    }

    /// Whether a submit right now would start a send.
    pub fn can_submit(&self) -> bool {
        self.session_ready && !self.pending && !self.input_text.trim().is_empty()
    }

    /// Accept the current input as a user message.
    ///
    /// Returns the text to send, or `None` when the input is blank, a send
    /// is already pending, or no session exists. A refused submit changes
    /// nothing.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            debug!(
                pending = self.pending,
                ready = self.session_ready,
                "Submit ignored"
            );
            return None;
        }

        let text = std::mem::take(&mut self.input_text);
        self.push_message(ChatMessage::user(text.clone()));
        self.pending = true;
        self.phase = Phase::Sending;
        self.changes.push(ViewChange::InputCleared);
        self.push_status();
        Some(text)
    }

    // -- Reply streaming --

    /// Append the empty model placeholder that fragments will fill.
    pub fn begin_reply(&mut self) {
        if !self.pending {
            warn!("Reply started with no pending send");
            return;
        }
        if self.slot.is_some() {
            return;
        }

        let index = self.push_message(ChatMessage::model(""));
        self.slot = Some(StreamSlot {
            index,
            accumulated: String::new(),
        });
        self.phase = Phase::Streaming;
        self.push_status();
    }

    /// Fold one fragment into the placeholder.
    pub fn apply_fragment(&mut self, fragment: &str) {
        if !self.pending {
            warn!("Fragment received with no pending send");
            return;
        }
        if self.slot.is_none() {
            self.begin_reply();
        }

        if let Some(slot) = self.slot.as_mut() {
            slot.accumulated.push_str(fragment);
            let text = slot.accumulated.clone();
            self.messages[slot.index].text = text.clone();
            self.changes.push(ViewChange::Replaced {
                index: slot.index,
                text,
            });
        }
    }

    /// The reply stream ended normally.
    pub fn finish_reply(&mut self) {
        if !self.pending {
            return;
        }
        if let Some(slot) = self.slot.take() {
            debug!(index = slot.index, len = slot.accumulated.len(), "Reply finished");
        }
        self.pending = false;
        self.phase = Phase::Idle;
        self.push_status();
    }

    /// The send failed. An empty placeholder becomes `fallback`; partial
    /// reply text stays visible and `fallback` follows it.
    pub fn fail_reply(&mut self, fallback: impl Into<String>) {
        if !self.pending {
            return;
        }
        let fallback = fallback.into();

        match self.slot.take() {
            Some(slot) if slot.accumulated.is_empty() => {
                self.messages[slot.index].text = fallback.clone();
                self.changes.push(ViewChange::Replaced {
                    index: slot.index,
                    text: fallback,
                });
            }
            _ => {
                self.push_message(ChatMessage::model(fallback));
            }
        }

        self.pending = false;
        self.phase = Phase::Failed;
        self.push_status();
    }

    // -- Renderer --

    /// Queue the full current state, e.g. for a freshly loaded view.
    pub fn resync(&mut self) {
        self.changes.push(ViewChange::Reset {
            messages: self.messages.clone(),
        });
        self.push_status();
    }

    /// Take all changes recorded since the last drain.
    pub fn drain_changes(&mut self) -> Vec<ViewChange> {
        std::mem::take(&mut self.changes)
    }

    fn push_message(&mut self, message: ChatMessage) -> usize {
        let index = self.messages.len();
        self.messages.push(message.clone());
        self.changes.push(ViewChange::Appended { index, message });
        index
    }

    fn push_status(&mut self) {
        self.changes.push(ViewChange::Status {
            pending: self.pending,
            typing: self.shows_typing_indicator(),
            ready: self.session_ready,
            can_send: self.can_submit(),
        });
    }

    // -- Getters --

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_session_ready(&self) -> bool {
        self.session_ready
    }

    /// Index of the message currently receiving fragments.
    pub fn streaming_index(&self) -> Option<usize> {
        self.slot.as_ref().map(|s| s.index)
    }

    /// A send is pending and the model has not started answering.
    pub fn shows_typing_indicator(&self) -> bool {
        self.pending
            && self
                .messages
                .last()
                .is_some_and(|m| m.role == ChatRole::User)
    }
}
