//! Chat view state for Solace.
//!
//! `Conversation` is the streaming accumulator: it owns the message list,
//! the input text and the pending flag, folds reply fragments into the
//! in-progress model message, and records every visible change as a
//! `ViewChange` for the renderer to consume.

pub mod conversation;
pub mod message;
pub mod view;

pub use conversation::{Conversation, Phase};
pub use message::{ChatMessage, ChatRole};
pub use view::ViewChange;
