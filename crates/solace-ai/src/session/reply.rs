//! The fragment stream for one in-flight reply.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use tracing::{debug, warn};

use crate::{AiError, FragmentStream};

use super::manager::Session;

/// Streamed reply to one `Session::send`.
///
/// Yields fragments in arrival order. Ends after the first error, which is
/// yielded once. Not restartable.
pub struct ReplyStream<'a> {
    session: &'a mut Session,
    user_text: Option<String>,
    fragments: FragmentStream,
    accumulated: String,
    done: bool,
}

impl<'a> ReplyStream<'a> {
    pub(super) fn new(session: &'a mut Session, user_text: String, fragments: FragmentStream) -> Self {
        Self {
            session,
            user_text: Some(user_text),
            fragments,
            accumulated: String::new(),
            done: false,
        }
    }

    /// Text received so far.
    pub fn accumulated(&self) -> &str {
        &self.accumulated
    }
}

impl Stream for ReplyStream<'_> {
    type Item = Result<String, AiError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }

        match this.fragments.as_mut().poll_next(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Some(Ok(fragment))) => {
                this.accumulated.push_str(&fragment);
                Poll::Ready(Some(Ok(fragment)))
            }
            Poll::Ready(Some(Err(e))) => {
                warn!(received = this.accumulated.len(), error = %e, "Reply stream failed");
                this.done = true;
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                this.done = true;
                let Some(user_text) = this.user_text.take() else {
                    return Poll::Ready(None);
                };
                if this.accumulated.is_empty() {
                    // An empty model turn is rejected by the API on every later send.
                    debug!("Empty reply; turn not kept");
                } else {
                    debug!(len = this.accumulated.len(), "Reply complete");
                    this.session
                        .commit_turn(user_text, this.accumulated.clone());
                }
                Poll::Ready(None)
            }
        }
    }
}
