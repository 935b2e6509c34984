//! HTTP response head construction.
//!
//! Response heads are represented by `http::Response<()>`: this subsystem only ever writes
//! status lines and headers, the response body belongs to later stages.

use http::header::CONNECTION;
use http::{HeaderValue, Response, StatusCode};

/// Type alias for HTTP response heads.
pub type ResponseHead = Response<()>;

const CLOSE: HeaderValue = HeaderValue::from_static("close");

/// Builds a head carrying only a status line.
pub fn status_head(status: StatusCode) -> ResponseHead {
    let mut head = Response::new(());
    *head.status_mut() = status;
    head
}

/// The interim `100 Continue` head.
pub fn continue_head() -> ResponseHead {
    status_head(StatusCode::CONTINUE)
}

/// A terminal head that also tells the client the connection will not be reused.
///
/// Used when rejecting an expectation: the client may already be sending the body we refused
/// to read, so the connection can't be kept alive.
pub fn closing_head(status: StatusCode) -> ResponseHead {
    let mut head = status_head(status);
    head.headers_mut().insert(CONNECTION, CLOSE);
    head
}
