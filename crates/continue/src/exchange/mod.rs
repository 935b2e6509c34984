//! The in-flight context of one request/response cycle.
//!
//! An [`Exchange`] is owned by value by whichever stage is running it. Handing it to the next
//! stage ([`Exchange::dispatch`]) or terminating it ([`Exchange::end`]) consumes it, so once a
//! stage gave it away it can't touch it again.
//!
//! Writes go through an [`ExchangeSink`]; [`FramedSink`] is the HTTP/1.1 implementation over
//! any `AsyncWrite`.

mod sink;

pub use sink::ExchangeSink;
pub use sink::FramedSink;
#[cfg(test)]
pub use sink::MockExchangeSink;

use std::fmt;
use std::sync::Arc;

use http::{HeaderMap, Version};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::ensure;
use crate::handler::ExchangeHandler;
use crate::protocol::{RequestHeader, ResponseHead, SendError};

pub struct Exchange {
    header: RequestHeader,
    sink: Box<dyn ExchangeSink>,
    response_started: bool,
    continue_sent: bool,
    dispatched: bool,
    ended: bool,
}

impl Exchange {
    pub fn new<H, S>(header: H, sink: S) -> Self
    where
        H: Into<RequestHeader>,
        S: ExchangeSink + 'static,
    {
        Self {
            header: header.into(),
            sink: Box::new(sink),
            response_started: false,
            continue_sent: false,
            dispatched: false,
            ended: false,
        }
    }

    pub fn request(&self) -> &RequestHeader {
        &self.header
    }

    pub fn version(&self) -> Version {
        self.header.version()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.header.headers()
    }

    /// Whether a final (non-1xx) response head has been written.
    pub fn is_response_started(&self) -> bool {
        self.response_started
    }

    pub fn is_continue_sent(&self) -> bool {
        self.continue_sent
    }

    /// Whether this exchange reached its current stage through [`Exchange::dispatch`].
    pub fn is_dispatched(&self) -> bool {
        self.dispatched
    }

    /// Writes an interim head. Only the continue responder sends these.
    pub(crate) async fn send_interim_head(&mut self, head: ResponseHead) -> Result<(), SendError> {
        ensure!(head.status().is_informational(), SendError::invalid_head("interim head must be 1xx"));
        ensure!(!self.response_started, SendError::ResponseStarted);
        self.sink.send_head(head).await
    }

    pub(crate) fn mark_continue_sent(&mut self) {
        self.continue_sent = true;
    }

    /// Writes the final response head.
    ///
    /// The response counts as started even if the write fails, since part of the head may
    /// already be on the wire.
    pub async fn send_response_head(&mut self, head: ResponseHead) -> Result<(), SendError> {
        ensure!(!head.status().is_informational(), SendError::invalid_head("final head must not be 1xx"));
        ensure!(!self.response_started, SendError::ResponseStarted);
        self.response_started = true;
        self.sink.send_head(head).await
    }

    /// Terminates the exchange, flushing and closing the transport.
    pub async fn end(mut self) {
        self.ended = true;
        if let Err(e) = self.sink.close().await {
            warn!(cause = %e, "failed to close exchange");
        }
    }

    /// Hands the exchange to `handler` on a fresh task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(mut self, handler: Arc<dyn ExchangeHandler>) -> JoinHandle<()> {
        self.dispatched = true;
        debug!(uri = %self.header.uri(), "dispatch exchange to next handler");
        tokio::spawn(async move { handler.handle(self).await })
    }
}

impl Drop for Exchange {
    fn drop(&mut self) {
        if !self.ended {
            // the sink is dropped with us, which releases the connection
            self.ended = true;
            debug!(uri = %self.header.uri(), "exchange dropped without end, closing");
        }
    }
}

impl fmt::Debug for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exchange")
            .field("header", &self.header)
            .field("response_started", &self.response_started)
            .field("continue_sent", &self.continue_sent)
            .field("dispatched", &self.dispatched)
            .field("ended", &self.ended)
            .finish_non_exhaustive()
    }
}
