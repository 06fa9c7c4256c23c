//! Internal types and constants for the app state module.

use std::time::Duration;

/// Events sent from the background chat task to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum ChatEvent {
    /// The session was created.
    Ready { model: String },
    /// The session could not be created. Carries the cause for logging.
    InitFailed(String),
    /// The request was accepted and a reply is on its way.
    ReplyStarted,
    /// One piece of reply text.
    Fragment(String),
    /// The reply ended normally.
    ReplyDone,
    /// The send or the reply stream failed.
    ReplyFailed(String),
}

/// How often to poll for events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Maximum accepted length of one submitted message, in bytes.
pub(super) const MAX_INPUT_LEN: usize = 4096;
