//! HTTP/1.1 `Expect: 100-continue` negotiation for async request pipelines
//!
//! A client that is about to upload a body can send `Expect: 100-continue` and hold the body
//! back until the server agrees. This crate provides the pipeline stage making that call:
//! it answers with an interim `100 Continue` (or a terminal rejection), waits until the
//! interim response is on the wire, and only then hands the request to the next stage.
//!
//! # Features
//!
//! - Interim response written at most once per exchange, and only for protocol versions that
//!   support it
//! - Pluggable accept/reject policy, accepting everything by default
//! - Non-blocking interim write, completion delivered as a future
//! - Next stage dispatched on a fresh task once the continue has been flushed
//! - Swappable next handler, safe to replace while requests are running
//! - I/O failures are logged and end the exchange, they never escape the handler
//!
//! # Example
//!
//! ```no_run
//! use micro_continue::exchange::{Exchange, FramedSink};
//! use micro_continue::expect::ContinueHandler;
//! use micro_continue::handler::{ExchangeHandler, handler_fn};
//! use micro_continue::protocol::{RequestHeader, status_head};
//! use http::StatusCode;
//! use tokio::net::TcpStream;
//! use tracing::error;
//!
//! async fn serve(header: RequestHeader, tcp_stream: TcpStream) {
//!     let handler = ContinueHandler::new(handler_fn(|mut exchange: Exchange| async move {
//!         // the client is sending the body now
//!         if let Err(e) = exchange.send_response_head(status_head(StatusCode::CREATED)).await {
//!             error!(cause = %e, "failed to send response");
//!         }
//!         exchange.end().await;
//!     }));
//!
//!     let (_reader, writer) = tcp_stream.into_split();
//!     handler.handle(Exchange::new(header, FramedSink::new(writer))).await;
//! }
//! ```
//!
//! # Architecture
//!
//! - [`expect`]: the continue predicate, accept policies, responder and [`expect::ContinueHandler`]
//! - [`exchange`]: the in-flight request context and the sink it writes through
//! - [`handler`]: the pipeline stage trait and ready-made stages
//! - [`protocol`]: request/response heads and error types
//! - [`codec`]: HTTP/1.1 encoding of response heads
//!
//! # Error Handling
//!
//! - [`protocol::SendError`]: writing a response head failed
//! - [`protocol::ContinueError`]: the asynchronous continue write failed or was cancelled
//! - [`protocol::ConfigError`]: invalid configuration, reported when it's applied
//! - [`protocol::ParseError`]: a parsed request couldn't be turned into a request head
//!
//! # Limitations
//!
//! - Response heads are encoded as HTTP/1.1; other transports bring their own
//!   [`exchange::ExchangeSink`]
//! - Reading the request body and writing the response body are left to later stages

pub mod codec;
pub mod exchange;
pub mod expect;
pub mod handler;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
