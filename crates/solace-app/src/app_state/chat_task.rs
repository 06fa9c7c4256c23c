//! Background async task that owns the Gemini chat session.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;

use solace_ai::{ChatClient, GeminiClient, GeminiConfig, InitError, Session};
use solace_config::schema::ModelConfig;

use super::types::ChatEvent;

/// Resolve the Gemini client for `model` from the process environment.
pub(super) fn gemini_client(model: &ModelConfig) -> Result<GeminiClient, InitError> {
    let config = GeminiConfig::from_env(&model.api_key_env)?
        .with_model(&model.name)
        .with_max_output_tokens(model.max_output_tokens)
        .with_temperature(model.temperature)
        .with_connect_timeout(Duration::from_secs(u64::from(model.connect_timeout_secs)));
    GeminiClient::new(config)
}

/// Background task: build the client, then serve the session.
pub(super) async fn chat_task(
    model: ModelConfig,
    system_instruction: String,
    user_rx: Receiver<String>,
    event_tx: Sender<ChatEvent>,
) {
    let client = match gemini_client(&model) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Gemini client not configured");
            let _ = event_tx.send(ChatEvent::InitFailed(e.to_string()));
            return;
        }
    };

    run_session(
        Arc::new(client),
        system_instruction,
        model.verify_on_start,
        user_rx,
        event_tx,
    )
    .await;
}

/// Create the session, then answer each submitted message in order until
/// the submit channel closes.
pub(super) async fn run_session(
    client: Arc<dyn ChatClient>,
    system_instruction: String,
    verify: bool,
    user_rx: Receiver<String>,
    event_tx: Sender<ChatEvent>,
) {
    let mut session = match Session::initialize(client, system_instruction, verify).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Chat session failed to start");
            let _ = event_tx.send(ChatEvent::InitFailed(e.to_string()));
            return;
        }
    };

    let model = session.model_name().to_string();
    if event_tx.send(ChatEvent::Ready { model }).is_err() {
        return;
    }

    while let Ok(text) = tokio::task::block_in_place(|| user_rx.recv()) {
        if !relay_reply(&mut session, text, &event_tx).await {
            break;
        }
    }
    tracing::debug!(turns = session.turn_count(), "Chat task finished");
}

/// Send one message and forward its reply. Returns `false` once the UI
/// side has gone away.
async fn relay_reply(session: &mut Session, text: String, event_tx: &Sender<ChatEvent>) -> bool {
    let mut reply = match session.send(text).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "Send failed");
            return event_tx.send(ChatEvent::ReplyFailed(e.to_string())).is_ok();
        }
    };

    if event_tx.send(ChatEvent::ReplyStarted).is_err() {
        return false;
    }

    while let Some(item) = reply.next().await {
        match item {
            Ok(fragment) => {
                if event_tx.send(ChatEvent::Fragment(fragment)).is_err() {
                    return false;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, received = reply.accumulated().len(), "Reply stream failed");
                return event_tx.send(ChatEvent::ReplyFailed(e.to_string())).is_ok();
            }
        }
    }

    event_tx.send(ChatEvent::ReplyDone).is_ok()
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use solace_ai::{AiError, FragmentStream, Message};

    use super::*;

    /// Replies with a fixed list of fragment lists, one per request.
    struct FakeClient {
        replies: Mutex<Vec<Vec<Result<String, AiError>>>>,
        reachable: bool,
        seen: Mutex<Vec<usize>>,
    }

    impl FakeClient {
        fn new(replies: Vec<Vec<Result<String, AiError>>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into_iter().rev().collect()),
                reachable: true,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ChatClient for FakeClient {
        fn model_name(&self) -> &str {
            "fake-model"
        }

        async fn stream_reply(
            &self,
            _system_instruction: &str,
            history: &[Message],
        ) -> Result<FragmentStream, AiError> {
            self.seen.lock().unwrap().push(history.len());
            match self.replies.lock().unwrap().pop() {
                Some(items) => Ok(Box::pin(futures_util::stream::iter(items))),
                None => Err(AiError::ApiError("HTTP 500: no reply".into())),
            }
        }

        async fn check_reachable(&self) -> Result<(), AiError> {
            if self.reachable {
                Ok(())
            } else {
                Err(AiError::NetworkError("unreachable".into()))
            }
        }
    }

    fn ok(s: &str) -> Result<String, AiError> {
        Ok(s.to_string())
    }

    /// Queue `messages`, close the channel, run the session to completion
    /// and collect every event it sent.
    async fn run(client: Arc<FakeClient>, verify: bool, messages: &[&str]) -> Vec<ChatEvent> {
        let (user_tx, user_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        for m in messages {
            user_tx.send(m.to_string()).unwrap();
        }
        drop(user_tx);

        tokio::spawn(run_session(client, "be kind".into(), verify, user_rx, event_tx))
            .await
            .unwrap();
        event_rx.try_iter().collect()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn streams_reply_in_order() {
        let client = FakeClient::new(vec![vec![ok("I'm"), ok(" here"), ok(" for you")]]);
        let events = run(client, false, &["Hi there"]).await;

        assert_eq!(
            events,
            vec![
                ChatEvent::Ready {
                    model: "fake-model".into()
                },
                ChatEvent::ReplyStarted,
                ChatEvent::Fragment("I'm".into()),
                ChatEvent::Fragment(" here".into()),
                ChatEvent::Fragment(" for you".into()),
                ChatEvent::ReplyDone,
            ]
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn later_sends_carry_history() {
        let client = FakeClient::new(vec![vec![ok("one")], vec![ok("two")]]);
        let events = run(client.clone(), false, &["a", "b"]).await;

        assert_eq!(events.iter().filter(|e| **e == ChatEvent::ReplyDone).count(), 2);
        assert_eq!(*client.seen.lock().unwrap(), vec![1, 3]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn mid_stream_failure_reports_and_continues() {
        let client = FakeClient::new(vec![
            vec![ok("partial"), Err(AiError::Timeout)],
            vec![ok("recovered")],
        ]);
        let events = run(client.clone(), false, &["first", "second"]).await;

        assert_eq!(events[1], ChatEvent::ReplyStarted);
        assert_eq!(events[2], ChatEvent::Fragment("partial".into()));
        assert_eq!(events[3], ChatEvent::ReplyFailed("Timeout".into()));
        assert_eq!(events.last(), Some(&ChatEvent::ReplyDone));
        // The failed turn was not kept.
        assert_eq!(*client.seen.lock().unwrap(), vec![1, 1]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn rejected_request_fails_without_starting() {
        let client = FakeClient::new(vec![]);
        let events = run(client, false, &["hello"]).await;

        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], ChatEvent::ReplyFailed(ref m) if m.contains("HTTP 500")));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn unreachable_service_fails_init_when_verified() {
        let client = Arc::new(FakeClient {
            replies: Mutex::new(Vec::new()),
            reachable: false,
            seen: Mutex::new(Vec::new()),
        });
        let events = run(client, true, &["hello"]).await;

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], ChatEvent::InitFailed(_)));
    }

    #[test]
    fn missing_credential_is_an_init_error() {
        let model = ModelConfig {
            api_key_env: "SOLACE_TEST_UNSET_API_KEY".into(),
            ..ModelConfig::default()
        };
        let err = gemini_client(&model).err().unwrap();
        assert!(matches!(err, InitError::MissingApiKey { ref var } if var == "SOLACE_TEST_UNSET_API_KEY"));
    }
}
