//! Writing the answer to an `Expect: 100-continue` request.
//!
//! [`send_continue_response`] runs the interim write on its own task and hands back a
//! [`ContinueCompletion`], a future resolved exactly once with the outcome of that write.
//! [`write_continue`] is the same write awaited in place, for callers already on their own
//! task. [`reject_exchange`] answers with a terminal status and ends the exchange.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use http::StatusCode;
use tokio::sync::oneshot;
use tracing::{debug, error, info};

use crate::ensure;
use crate::exchange::Exchange;
use crate::protocol::{ContinueError, SendError, closing_head, continue_head};

/// Writes `100 Continue` and waits until it has been flushed.
///
/// A continue already sent on this exchange is not repeated. The exchange is marked before
/// the write starts, so a failed attempt is never retried on the same connection.
pub async fn write_continue(exchange: &mut Exchange) -> Result<(), SendError> {
    if exchange.is_continue_sent() {
        debug!("continue response already sent, skip");
        return Ok(());
    }
    ensure!(!exchange.is_response_started(), SendError::ResponseStarted);

    exchange.mark_continue_sent();
    exchange.send_interim_head(continue_head()).await?;
    info!(uri = %exchange.request().uri(), "receive expect request header, sent continue response");
    Ok(())
}

/// Starts writing `100 Continue` without waiting for it.
///
/// The write runs on a new task, so this must be called from within a tokio runtime.
pub fn send_continue_response(mut exchange: Exchange) -> ContinueCompletion {
    let (sender, receiver) = oneshot::channel();
    tokio::spawn(async move {
        let result = match write_continue(&mut exchange).await {
            Ok(()) => Ok(exchange),
            Err(source) => Err(ContinueError::io(exchange, source)),
        };
        if let Err(_unobserved) = sender.send(result) {
            // nobody waits for the outcome anymore, the exchange ends when dropped here
            debug!("continue completion dropped before the write finished");
        }
    });
    ContinueCompletion { receiver }
}

/// Answers with `status` and ends the exchange.
///
/// The head carries `Connection: close`: the client may already be streaming the body we
/// refused, so the connection can't be reused. A failed write is logged, the exchange is ended
/// either way.
pub async fn reject_exchange(mut exchange: Exchange, status: StatusCode) {
    match exchange.send_response_head(closing_head(status)).await {
        Ok(()) => info!(uri = %exchange.request().uri(), status = %status, "rejected expect request"),
        Err(e) => error!(cause = %e, status = %status, "failed to send expect rejection"),
    }
    exchange.end().await;
}

/// Outcome of [`send_continue_response`].
///
/// Resolves to the exchange once `100 Continue` has been flushed, or to a [`ContinueError`]:
/// [`ContinueError::Io`] hands the exchange back for the caller to end, and
/// [`ContinueError::Cancelled`] means the write task went away with the exchange.
#[derive(Debug)]
#[must_use = "the exchange is only handed back through the completion"]
pub struct ContinueCompletion {
    receiver: oneshot::Receiver<Result<Exchange, ContinueError>>,
}

impl Future for ContinueCompletion {
    type Output = Result<Exchange, ContinueError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match ready!(Pin::new(&mut self.receiver).poll(cx)) {
            Ok(result) => Poll::Ready(result),
            Err(_closed) => Poll::Ready(Err(ContinueError::Cancelled)),
        }
    }
}
