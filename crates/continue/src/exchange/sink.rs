use async_trait::async_trait;
use futures::SinkExt;
use tokio::io::AsyncWrite;
use tokio_util::codec::FramedWrite;

use crate::codec::HeadEncoder;
use crate::protocol::{ResponseHead, SendError};

/// The transport side of an exchange: where response heads are written.
///
/// `send_head` resolves once the head has been flushed to the underlying connection, which is
/// the completion the continue handshake waits on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExchangeSink: Send {
    async fn send_head(&mut self, head: ResponseHead) -> Result<(), SendError>;

    /// Flushes whatever is buffered and shuts the write side down.
    async fn close(&mut self) -> Result<(), SendError>;
}

/// An [`ExchangeSink`] writing HTTP/1.1 heads to any `AsyncWrite`.
#[derive(Debug)]
pub struct FramedSink<W> {
    framed_write: FramedWrite<W, HeadEncoder>,
}

impl<W> FramedSink<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(writer: W) -> Self {
        Self { framed_write: FramedWrite::new(writer, HeadEncoder) }
    }

    pub fn into_inner(self) -> W {
        self.framed_write.into_inner()
    }
}

#[async_trait]
impl<W> ExchangeSink for FramedSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn send_head(&mut self, head: ResponseHead) -> Result<(), SendError> {
        // send flushes, the head must be on the wire before we report completion
        self.framed_write.send(head).await
    }

    async fn close(&mut self) -> Result<(), SendError> {
        SinkExt::<ResponseHead>::close(&mut self.framed_write).await
    }
}
