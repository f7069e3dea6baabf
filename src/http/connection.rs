use std::net::SocketAddr;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::http::parser::{find_headers_end, parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router::Router;
use crate::http::writer::ResponseWriter;

const READ_CHUNK: usize = 1024;

/// One accepted connection, served for exactly one request.
pub struct Connection<'r, S> {
    stream: S,
    peer: SocketAddr,
    router: &'r Router,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Parsed(Request),
    Responding(Response),
    Closed,
}

impl<'r, S> Connection<'r, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, router: &'r Router) -> Self {
        Self {
            stream,
            peer,
            router,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
        }
    }

    /// Runs the connection to completion.
    ///
    /// The stream is consumed: whichever way this returns, it has been
    /// shut down and dropped. An error here only ever concerns this
    /// connection.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let res = self.drive().await;
        let _ = self.stream.shutdown().await;
        debug!(peer = %self.peer, "connection closed");
        res
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.read_request().await?;
                    self.state = match parse_http_request(&self.buffer) {
                        Ok(req) => {
                            info!(peer = %self.peer, method = %req.method, path = %req.path, "request");
                            ConnectionState::Parsed(req)
                        }
                        Err(ParseError::Empty) => {
                            warn!(peer = %self.peer, "empty request");
                            ConnectionState::Closed
                        }
                        Err(err @ ParseError::Malformed(_)) => {
                            warn!(peer = %self.peer, "{}", err);
                            ConnectionState::Closed
                        }
                    };
                }

                ConnectionState::Parsed(req) => {
                    let response = self.router.handle(&req, self.peer).await?;
                    self.state = ConnectionState::Responding(response);
                }

                ConnectionState::Responding(response) => {
                    ResponseWriter::new(&response)
                        .write_to_stream(&mut self.stream)
                        .await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the header terminator shows up or the client stops sending.
    async fn read_request(&mut self) -> anyhow::Result<()> {
        while find_headers_end(&self.buffer).is_none() {
            self.buffer.reserve(READ_CHUNK);
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                break;
            }
        }

        Ok(())
    }
}
