//! Encoder serializing response heads into HTTP/1.1 wire format.
//!
//! Interim (1xx) heads are written as a bare status line plus whatever headers they carry.
//! Final heads written by this crate never have a body, so they always get
//! `Content-Length: 0`, which keeps the framing unambiguous for the client.

use crate::protocol::{ResponseHead, SendError};

use bytes::{BufMut, BytesMut};

use http::{HeaderValue, Version, header};
use std::io;
use std::io::Write;
use tokio_util::codec::Encoder;
use tracing::error;

/// Initial buffer size allocated for head serialization
const INIT_HEAD_SIZE: usize = 1024;

#[derive(Debug, Default, Clone, Copy)]
pub struct HeadEncoder;

impl Encoder<ResponseHead> for HeadEncoder {
    type Error = SendError;

    fn encode(&mut self, mut head: ResponseHead, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(INIT_HEAD_SIZE);
        match head.version() {
            Version::HTTP_11 => {
                write!(
                    FastWrite(dst),
                    "HTTP/1.1 {} {}\r\n",
                    head.status().as_str(),
                    head.status().canonical_reason().unwrap_or_default()
                )?;
            }
            v => {
                error!(http_version = ?v, "unsupported http version");
                return Err(SendError::UnsupportedVersion(v));
            }
        }

        if head.status().is_informational() {
            head.headers_mut().remove(header::CONTENT_LENGTH);
        } else {
            const ZERO_VALUE: HeaderValue = HeaderValue::from_static("0");
            head.headers_mut().insert(header::CONTENT_LENGTH, ZERO_VALUE);
        }

        for (header_name, header_value) in head.headers() {
            dst.put_slice(header_name.as_ref());
            dst.put_slice(b": ");
            dst.put_slice(header_value.as_ref());
            dst.put_slice(b"\r\n");
        }
        dst.put_slice(b"\r\n");
        Ok(())
    }
}

/// Writes straight into the reserved `BytesMut`.
struct FastWrite<'a>(&'a mut BytesMut);

impl Write for FastWrite<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::*;
    use crate::protocol::{closing_head, continue_head, status_head};

    fn encode(head: ResponseHead) -> Result<BytesMut, SendError> {
        let mut dst = BytesMut::new();
        HeadEncoder.encode(head, &mut dst)?;
        Ok(dst)
    }

    #[test]
    fn continue_is_a_bare_status_line() {
        let dst = encode(continue_head()).unwrap();
        assert_eq!(&dst[..], b"HTTP/1.1 100 Continue\r\n\r\n");
    }

    #[test]
    fn interim_head_drops_content_length() {
        let mut head = continue_head();
        head.headers_mut().insert(header::CONTENT_LENGTH, HeaderValue::from_static("10"));

        let dst = encode(head).unwrap();
        assert_eq!(&dst[..], b"HTTP/1.1 100 Continue\r\n\r\n");
    }

    #[test]
    fn rejection_head_is_empty_and_closing() {
        let dst = encode(closing_head(StatusCode::EXPECTATION_FAILED)).unwrap();
        assert_eq!(&dst[..], b"HTTP/1.1 417 Expectation Failed\r\nconnection: close\r\ncontent-length: 0\r\n\r\n");
    }

    #[test]
    fn final_head_overrides_content_length() {
        let mut head = status_head(StatusCode::NOT_FOUND);
        head.headers_mut().insert(header::CONTENT_LENGTH, HeaderValue::from_static("42"));

        let dst = encode(head).unwrap();
        assert_eq!(&dst[..], b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\n\r\n");
    }

    #[test]
    fn unknown_reason_phrase_is_empty() {
        let dst = encode(status_head(StatusCode::from_u16(599).unwrap())).unwrap();
        assert_eq!(&dst[..], b"HTTP/1.1 599 \r\ncontent-length: 0\r\n\r\n");
    }

    #[test]
    fn http2_head_is_unsupported() {
        let mut head = continue_head();
        *head.version_mut() = Version::HTTP_2;

        assert!(matches!(encode(head), Err(SendError::UnsupportedVersion(Version::HTTP_2))));
    }
}
