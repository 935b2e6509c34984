use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use http::{StatusCode, Version};
use tracing::{error, warn};

use crate::exchange::Exchange;
use crate::expect::{
    AcceptPolicy, AlwaysAccept, ContinueConfig, reject_exchange, requires_continue_response, send_continue_response,
};
use crate::handler::{BoxHandler, ExchangeHandler, StatusCodeHandler};
use crate::protocol::{ConfigError, ContinueError};

/// A pipeline stage answering `Expect: 100-continue` before the rest of the chain runs.
///
/// Exchanges that don't ask for a continue go straight to the next handler. The others are
/// put to the [`AcceptPolicy`]: accepted ones get `100 Continue` and, once it has been flushed,
/// are dispatched to the next handler on a new task; refused ones are answered with the
/// configured rejection status and never reach the next handler.
///
/// By default every request is accepted and the next handler answers `404 Not Found`.
pub struct ContinueHandler {
    next: ArcSwap<BoxHandler>,
    policy: Arc<dyn AcceptPolicy>,
    config: ContinueConfig,
}

impl ContinueHandler {
    pub fn new<H: ExchangeHandler + 'static>(next: H) -> Self {
        Self::builder().next(next).build()
    }

    pub fn builder() -> ContinueHandlerBuilder {
        ContinueHandlerBuilder::new()
    }

    /// The handler exchanges are passed to.
    pub fn next(&self) -> BoxHandler {
        Arc::clone(&**self.next.load())
    }

    pub fn set_next(&self, next: BoxHandler) -> &Self {
        self.next.store(Arc::new(next));
        self
    }

    /// Like [`set_next`](Self::set_next), for handlers resolved at runtime.
    ///
    /// `None` is refused and the installed handler stays in place.
    pub fn try_set_next(&self, next: Option<BoxHandler>) -> Result<&Self, ConfigError> {
        let next = next.ok_or(ConfigError::MissingNextHandler)?;
        Ok(self.set_next(next))
    }

    pub fn config(&self) -> &ContinueConfig {
        &self.config
    }
}

#[async_trait]
impl ExchangeHandler for ContinueHandler {
    async fn handle(&self, exchange: Exchange) {
        let next = self.next();

        if !requires_continue_response(&exchange, &self.config) {
            next.handle(exchange).await;
            return;
        }

        if !self.policy.accept(&exchange) {
            reject_exchange(exchange, self.config.rejection_status()).await;
            return;
        }

        let completion = send_continue_response(exchange);
        tokio::spawn(async move {
            match completion.await {
                Ok(exchange) => {
                    exchange.dispatch(next);
                }
                Err(ContinueError::Io { exchange, source }) => {
                    error!(cause = %source, "failed to send continue response, end exchange");
                    (*exchange).end().await;
                }
                Err(ContinueError::Cancelled) => {
                    warn!("continue response cancelled before completion");
                }
            }
        });
    }
}

impl Default for ContinueHandler {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for ContinueHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinueHandler").field("config", &self.config).finish_non_exhaustive()
    }
}

pub struct ContinueHandlerBuilder {
    next: Option<BoxHandler>,
    policy: Option<Arc<dyn AcceptPolicy>>,
    config: ContinueConfig,
}

impl ContinueHandlerBuilder {
    fn new() -> Self {
        Self { next: None, policy: None, config: ContinueConfig::default() }
    }

    pub fn next<H: ExchangeHandler + 'static>(mut self, next: H) -> Self {
        self.next = Some(Arc::new(next));
        self
    }

    pub fn policy<P: AcceptPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Some(Arc::new(policy));
        self
    }

    pub fn config(mut self, config: ContinueConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rejection_status(mut self, status: StatusCode) -> Self {
        self.config = self.config.with_rejection_status(status);
        self
    }

    pub fn continue_versions(mut self, versions: impl IntoIterator<Item = Version>) -> Self {
        self.config = self.config.with_continue_versions(versions);
        self
    }

    pub fn build(self) -> ContinueHandler {
        let next = self.next.unwrap_or_else(|| Arc::new(StatusCodeHandler::not_found()));
        let policy = self.policy.unwrap_or_else(|| Arc::new(AlwaysAccept));
        ContinueHandler { next: ArcSwap::from_pointee(next), policy, config: self.config }
    }
}

impl fmt::Debug for ContinueHandlerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinueHandlerBuilder")
            .field("next", &self.next.is_some())
            .field("policy", &self.policy.is_some())
            .field("config", &self.config)
            .finish()
    }
}
