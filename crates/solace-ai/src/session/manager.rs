//! Session struct, initialization, and sending.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{AiError, ChatClient, InitError, Message};

use super::reply::ReplyStream;

/// A conversation with one remote model, bound to a fixed system instruction.
pub struct Session {
    /// Model client shared with nothing else.
    pub(super) client: Arc<dyn ChatClient>,
    /// System instruction sent with every request.
    pub(super) system_instruction: String,
    /// Completed turns, oldest first.
    pub(super) history: Vec<Message>,
}

impl Session {
    /// Create a session. With `verify` set, the client is checked once so
    /// a rejected credential or unreachable service fails here.
    pub async fn initialize(
        client: Arc<dyn ChatClient>,
        system_instruction: impl Into<String>,
        verify: bool,
    ) -> Result<Self, InitError> {
        if verify {
            client.check_reachable().await.map_err(InitError::Unreachable)?;
        }

        info!(model = %client.model_name(), verified = verify, "Chat session created");

        Ok(Self {
            client,
            system_instruction: system_instruction.into(),
            history: Vec::new(),
        })
    }

    /// Send a user message and open the streamed reply.
    ///
    /// The exclusive borrow keeps a second send from starting while a reply
    /// is still being read. The turn joins the history only once the reply
    /// stream has been read to its end without error and produced text.
    pub async fn send(&mut self, text: impl Into<String>) -> Result<ReplyStream<'_>, AiError> {
        let text = text.into();

        let mut request = self.history.clone();
        request.push(Message::user(text.clone()));

        debug!(
            turns = self.history.len(),
            len = text.len(),
            "Sending message"
        );

        let client = Arc::clone(&self.client);
        let fragments = client
            .stream_reply(&self.system_instruction, &request)
            .await?;

        Ok(ReplyStream::new(self, text, fragments))
    }

    pub(super) fn commit_turn(&mut self, user_text: String, reply: String) {
        self.history.push(Message::user(user_text));
        self.history.push(Message::model(reply));
        debug!(turns = self.history.len(), "Turn committed");
    }

    /// Get the committed conversation history.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Number of completed exchanges.
    pub fn turn_count(&self) -> usize {
        self.history.len() / 2
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }
}
