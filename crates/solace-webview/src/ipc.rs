//! IPC protocol between Rust and the chat page.
//!
//! - **JS -> Rust**: the page calls `window.solace.ipc.send(kind, payload)`,
//!   which posts `{kind, payload}` as JSON to the WebView's IPC handler.
//! - **Rust -> JS**: Rust evaluates `window.solace.ipc._dispatch(kind, payload)`,
//!   which invokes the callback the page registered with `on(kind, ..)`.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    #[serde(default = "IpcPayload::none")]
    pub payload: IpcPayload,
}

/// Payload of an IPC message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcPayload {
    fn none() -> Self {
        IpcPayload::None
    }

    /// Look up a string field of a JSON object payload.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        match self {
            IpcPayload::Json(value) => value.get(key).and_then(|v| v.as_str()),
            _ => None,
        }
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Installs `window.solace.ipc` before any page script runs.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.solace = window.solace || {};
    window.solace.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Build the script that delivers `kind` + `payload` to the page.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.solace.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
