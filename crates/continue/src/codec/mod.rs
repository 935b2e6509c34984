//! Wire encoding of response heads.
//!
//! [`HeadEncoder`] turns a [`ResponseHead`](crate::protocol::ResponseHead) into HTTP/1.1
//! bytes. It plugs into `tokio_util::codec::FramedWrite`, which is how
//! [`FramedSink`](crate::exchange::FramedSink) writes interim and terminal heads.

mod head_encoder;

pub use head_encoder::HeadEncoder;
