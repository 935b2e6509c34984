//! Answers `Expect: 100-continue` uploads up to 1 MiB, try it with
//! `curl -v -T some-file http://127.0.0.1:8080/upload`.

use std::error::Error;
use std::sync::Arc;

use bytes::BytesMut;
use http::StatusCode;
use micro_continue::exchange::{Exchange, FramedSink};
use micro_continue::expect::{ContinueHandler, MaxContentLength};
use micro_continue::handler::{ExchangeHandler, handler_fn};
use micro_continue::protocol::{RequestHeader, status_head};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::TcpListener;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

const MAX_HEAD_SIZE: usize = 8 * 1024;
const MAX_HEADERS: usize = 64;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!(port = 8080, "start listening");
    let tcp_listener = match TcpListener::bind("127.0.0.1:8080").await {
        Ok(tcp_listener) => tcp_listener,
        Err(e) => {
            error!(cause = %e, "bind server error");
            return;
        }
    };

    let upload = handler_fn(|mut exchange: Exchange| async move {
        info!(uri = %exchange.request().uri(), continue_sent = exchange.is_continue_sent(), "accept upload");
        if let Err(e) = exchange.send_response_head(status_head(StatusCode::CREATED)).await {
            error!(cause = %e, "failed to send response");
        }
        exchange.end().await;
    });

    let handler = Arc::new(ContinueHandler::builder().next(upload).policy(MaxContentLength::new(1024 * 1024)).build());

    loop {
        let (tcp_stream, _remote_addr) = match tcp_listener.accept().await {
            Ok(stream_and_addr) => stream_and_addr,
            Err(e) => {
                warn!(cause = %e, "failed to accept");
                continue;
            }
        };

        let handler = Arc::clone(&handler);

        tokio::spawn(async move {
            let (mut reader, writer) = tcp_stream.into_split();
            match read_head(&mut reader).await {
                Ok(Some(header)) => handler.handle(Exchange::new(header, FramedSink::new(writer))).await,
                Ok(None) => info!("connection closed before a request arrived"),
                Err(e) => error!(cause = %e, "can't read request head, connection shutdown"),
            }
        });
    }
}

async fn read_head<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Option<RequestHeader>, Box<dyn Error + Send + Sync>> {
    let mut buf = BytesMut::with_capacity(MAX_HEAD_SIZE);
    loop {
        if reader.read_buf(&mut buf).await? == 0 {
            return Ok(None);
        }

        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
        let mut req = httparse::Request::new(&mut headers);
        if req.parse(&buf)?.is_complete() {
            return Ok(Some(RequestHeader::try_from(req)?));
        }

        if buf.len() >= MAX_HEAD_SIZE {
            return Err("request head too large".into());
        }
    }
}
