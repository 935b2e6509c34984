//! Pipeline stages.
//!
//! An [`ExchangeHandler`] is one step of the handler chain. It takes ownership of the exchange
//! and either hands it on or ends it; nothing is returned to the caller, failures are handled
//! inside the stage.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use tracing::error;

use crate::exchange::Exchange;
use crate::protocol::status_head;

#[async_trait]
pub trait ExchangeHandler: Send + Sync {
    async fn handle(&self, exchange: Exchange);
}

#[async_trait]
impl<H> ExchangeHandler for Arc<H>
where
    H: ExchangeHandler + ?Sized,
{
    async fn handle(&self, exchange: Exchange) {
        (**self).handle(exchange).await;
    }
}

#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> ExchangeHandler for HandlerFn<F>
where
    F: Fn(Exchange) -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send,
{
    async fn handle(&self, exchange: Exchange) {
        (self.f)(exchange).await;
    }
}

pub fn handler_fn<F, Fut>(f: F) -> HandlerFn<F>
where
    F: Fn(Exchange) -> Fut,
    Fut: Future<Output = ()>,
{
    HandlerFn { f }
}

/// A terminal stage answering every exchange with a fixed status and an empty body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCodeHandler {
    status: StatusCode,
}

impl StatusCodeHandler {
    pub const fn new(status: StatusCode) -> Self {
        Self { status }
    }

    pub const fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

#[async_trait]
impl ExchangeHandler for StatusCodeHandler {
    async fn handle(&self, mut exchange: Exchange) {
        if let Err(e) = exchange.send_response_head(status_head(self.status)).await {
            error!(cause = %e, status = %self.status, "failed to send response");
        }
        exchange.end().await;
    }
}

/// Shared, type-erased handler as stored in a pipeline.
pub type BoxHandler = Arc<dyn ExchangeHandler>;

#[cfg(test)]
mod tests {
    use http::Request;
    use tokio::io::AsyncReadExt;

    use super::*;
    use crate::exchange::FramedSink;

    fn assert_is_handler<T: ExchangeHandler>(_handler: &T) {
        // no op
    }

    #[test]
    fn fn_and_arc_are_handlers() {
        let handler = handler_fn(|_exchange: Exchange| async {});
        assert_is_handler(&handler);
        assert_is_handler(&Arc::new(handler));

        let boxed: BoxHandler = Arc::new(StatusCodeHandler::not_found());
        assert_is_handler(&boxed);
    }

    #[tokio::test]
    async fn status_code_handler_answers_and_ends() {
        let (mut client, server) = tokio::io::duplex(1024);
        let exchange = Exchange::new(Request::new(()), FramedSink::new(server));

        StatusCodeHandler::not_found().handle(exchange).await;

        let mut received = String::new();
        client.read_to_string(&mut received).await.unwrap();
        assert_eq!(received, "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\n\r\n");
    }
}
