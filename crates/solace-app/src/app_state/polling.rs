//! Periodic polling of chat and WebView events.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use solace_webview::WebViewEvent;

use super::core::SolaceApp;
use super::types::POLL_INTERVAL;

impl SolaceApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_chat();
            self.poll_webview_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { body } => self.handle_ipc_message(&body),
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "Chat page load event");
                }
                WebViewEvent::NavigationBlocked { url } => {
                    tracing::warn!(url = %url, "Chat page tried to leave the app");
                }
            }
        }
    }
}
