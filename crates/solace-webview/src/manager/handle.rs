use wry::WebView;

use super::WebViewError;

/// Handle to the live WebView.
pub struct WebViewHandle {
    pub(super) webview: WebView,
}

impl WebViewHandle {
    /// Execute JavaScript in the page.
    pub fn evaluate_script(&self, js: &str) -> Result<(), WebViewError> {
        Ok(self.webview.evaluate_script(js)?)
    }

    /// Deliver a typed IPC message to the page's `window.solace.ipc` handlers.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), WebViewError> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.evaluate_script(&script)
    }

    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), WebViewError> {
        Ok(self.webview.set_bounds(bounds)?)
    }

    pub fn focus(&self) -> Result<(), WebViewError> {
        Ok(self.webview.focus()?)
    }
}
