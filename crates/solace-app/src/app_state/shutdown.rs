//! Graceful shutdown: stop the chat task, destroy the view, stop the runtime.

use std::time::Duration;

use super::core::SolaceApp;

impl SolaceApp {
    /// Perform graceful shutdown. Safe to call more than once.
    ///
    /// Order matters:
    /// 1. Drop the submit channel so the chat task's receive loop ends
    /// 2. Destroy the chat view
    /// 3. Shut down the tokio runtime
    pub(super) fn shutdown(&mut self) {
        if self.should_exit && self.tokio_runtime.is_none() && self.chat_view.is_none() {
            return;
        }
        tracing::info!("Initiating graceful shutdown");

        self.chat_tx = None;
        self.chat_rx = None;

        self.chat_view = None;
        self.webviews = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }
}
