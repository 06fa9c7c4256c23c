//! WebView host for the Solace chat page.
//!
//! Wraps `wry` to provide:
//! - A single child WebView filling the app window
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - The `solace://` custom protocol for bundled content
//! - Navigation allowlisting and page-load events

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewError, WebViewHandle, WebViewManager};
