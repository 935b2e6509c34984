use std::io;

use http::Version;
use thiserror::Error;

use crate::exchange::Exchange;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },

    #[error("invalid http version: {0:?}")]
    InvalidVersion(Option<u8>),

    #[error("invalid http method")]
    InvalidMethod,

    #[error("invalid http uri")]
    InvalidUri,
}

impl ParseError {
    pub fn invalid_header<S: ToString>(str: S) -> Self {
        Self::InvalidHeader { reason: str.to_string() }
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("unsupported http version: {0:?}")]
    UnsupportedVersion(Version),

    #[error("response already started")]
    ResponseStarted,

    #[error("invalid response head: {reason}")]
    InvalidHead { reason: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn invalid_head<S: ToString>(str: S) -> Self {
        Self::InvalidHead { reason: str.to_string() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

/// Failure outcome of an asynchronous `100 Continue` write.
#[derive(Error, Debug)]
pub enum ContinueError {
    /// The interim write failed; the exchange is handed back so the caller can end it.
    #[error("failed to send continue response: {source}")]
    Io { exchange: Box<Exchange>, source: SendError },

    /// The write task went away without reporting. Its exchange was ended when it was dropped.
    #[error("continue response was cancelled before completion")]
    Cancelled,
}

impl ContinueError {
    pub fn io(exchange: Exchange, source: SendError) -> Self {
        Self::Io { exchange: Box::new(exchange), source }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("next handler must be set")]
    MissingNextHandler,
}
