//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events queued by the WebView for the app to drain.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    PageLoad { state: PageLoadState, url: String },
    /// A JSON IPC body posted by the page.
    IpcMessage { body: String },
    /// A navigation outside the allowlist was refused.
    NavigationBlocked { url: String },
}
