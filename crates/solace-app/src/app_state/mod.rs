//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the chat WebView, the `Conversation` and
//! the channels to the background chat task.

mod bounds;
mod chat;
mod chat_task;
mod core;
mod event_handler;
mod init;
mod ipc_dispatch;
mod polling;
mod shutdown;
mod types;

pub use core::SolaceApp;
