//! Protocol types shared by the continue handshake.
//!
//! - [`RequestHeader`]: the parsed request head an exchange is built from
//! - [`ResponseHead`]: status line and headers written back to the client
//! - Error types:
//!   - [`ParseError`]: converting a parsed request into a [`RequestHeader`]
//!   - [`SendError`]: writing response heads
//!   - [`ContinueError`]: outcome of an asynchronous `100 Continue` write
//!   - [`ConfigError`]: configuration-time contract violations

mod request;
pub use request::RequestHeader;

mod response;
pub use response::ResponseHead;
pub use response::closing_head;
pub use response::continue_head;
pub use response::status_head;

mod error;
pub use error::ConfigError;
pub use error::ContinueError;
pub use error::ParseError;
pub use error::SendError;
