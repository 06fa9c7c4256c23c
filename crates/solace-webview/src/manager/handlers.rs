use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

/// URL prefixes the WebView may navigate to. Everything else is blocked.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "solace://",
    // WebView2 on Windows rewrites solace://localhost/… to http://solace.localhost/…
    "http://solace.localhost/",
    "about:blank",
];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

fn push_event(events: &EventSink, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "IPC message from JS");
            push_event(&events, WebViewEvent::IpcMessage { body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            push_event(&events, WebViewEvent::PageLoad { state, url });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(url = %url, "navigation blocked: URL not in allowlist");
                push_event(&events, WebViewEvent::NavigationBlocked { url });
                return false;
            }
            debug!(url = %url, "navigation allowed");
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_solace_protocol() {
        assert!(is_navigation_allowed("solace://localhost/panels/chat/index.html"));
        assert!(is_navigation_allowed("http://solace.localhost/panels/chat/index.html"));
        assert!(is_navigation_allowed("about:blank"));
    }

    #[test]
    fn blocks_remote_origins() {
        assert!(!is_navigation_allowed("https://evil.com"));
        assert!(!is_navigation_allowed("http://localhost:8080"));
        assert!(!is_navigation_allowed("https://generativelanguage.googleapis.com/"));
    }

    #[test]
    fn blocks_lookalike_host() {
        assert!(!is_navigation_allowed("http://solace.localhost.evil.com/"));
    }

    #[test]
    fn blocks_script_and_file_schemes() {
        assert!(!is_navigation_allowed("javascript:alert(1)"));
        assert!(!is_navigation_allowed("data:text/html,<h1>x</h1>"));
        assert!(!is_navigation_allowed("file:///etc/passwd"));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        assert!(!is_navigation_allowed(""));
        assert!(!is_navigation_allowed("not-a-url"));
    }
}
