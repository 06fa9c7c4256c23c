//! SolaceApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use solace_chat::Conversation;
use solace_config::SolaceConfig;
use solace_webview::{WebViewHandle, WebViewManager};

use super::types::ChatEvent;

/// Top-level application state.
pub struct SolaceApp {
    pub(super) config: SolaceConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Chat page
    pub(super) webviews: Option<WebViewManager>,
    pub(super) chat_view: Option<WebViewHandle>,

    // Conversation state shown by the page
    pub(super) conversation: Conversation,
    pub(super) model_name: Option<String>,

    // Background chat task
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) chat_rx: Option<std::sync::mpsc::Receiver<ChatEvent>>,
    pub(super) chat_tx: Option<std::sync::mpsc::Sender<String>>,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl SolaceApp {
    pub fn new(config: SolaceConfig) -> Self {
        Self {
            config,
            window: None,
            webviews: None,
            chat_view: None,
            conversation: Conversation::new(),
            model_name: None,
            tokio_runtime: None,
            chat_rx: None,
            chat_tx: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
