//! Conversation session management.
//!
//! A `Session` is created once per application run with a fixed system
//! instruction. It owns the running turn history and hands out one
//! `ReplyStream` per sent message.

mod manager;
mod reply;


pub use manager::Session;
pub use reply::ReplyStream;
