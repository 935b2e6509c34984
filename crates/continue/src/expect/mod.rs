//! `Expect: 100-continue` negotiation.
//!
//! A client announcing a body with `Expect: 100-continue` waits for the server's permission
//! before sending it. This module decides whether that permission is owed and given, writes
//! the answer, and resumes the pipeline afterwards:
//!
//! - [`requires_continue_response`]: whether the exchange asked for a continue and the server
//!   has to answer it (version gating, already answered, response already started)
//! - [`AcceptPolicy`]: the accept/reject decision, [`AlwaysAccept`] unless replaced
//! - [`send_continue_response`] / [`reject_exchange`]: the wire-level answer
//! - [`ContinueHandler`]: the pipeline stage tying them together
//!
//! # Example
//!
//! ```no_run
//! use micro_continue::exchange::Exchange;
//! use micro_continue::expect::{ContinueHandler, MaxContentLength};
//! use micro_continue::handler::handler_fn;
//!
//! let upload = handler_fn(|exchange: Exchange| async move {
//!     // the client is now sending the body
//!     exchange.end().await;
//! });
//!
//! let handler = ContinueHandler::builder()
//!     .next(upload)
//!     .policy(MaxContentLength::new(8 * 1024 * 1024))
//!     .build();
//! ```

mod config;
mod handler;
mod policy;
mod predicate;
mod responder;

pub use config::ContinueConfig;
pub use handler::ContinueHandler;
pub use handler::ContinueHandlerBuilder;
pub use policy::AcceptPolicy;
pub use policy::AlwaysAccept;
pub use policy::MaxContentLength;
pub use policy::always_accept;
pub use policy::fn_policy;
pub use predicate::CONTINUE;
pub use predicate::expects_continue;
pub use predicate::requires_continue_response;
pub use responder::ContinueCompletion;
pub use responder::reject_exchange;
pub use responder::send_continue_response;
pub use responder::write_continue;
