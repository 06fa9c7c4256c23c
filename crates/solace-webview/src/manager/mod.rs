//! WebView lifecycle management.
//!
//! `WebViewManager` builds the chat WebView as a child of the app window and
//! collects the events it raises for the main loop to consume.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Errors raised while creating or driving a WebView.
#[derive(Debug, thiserror::Error)]
pub enum WebViewError {
    #[error("webview error: {0}")]
    Wry(#[from] wry::Error),
}

/// Builds WebViews and owns their event queue.
pub struct WebViewManager {
    /// Pushed to by wry callbacks, drained by the main loop.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self
            .events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
