//! Per-connection driver
//!
//! Reads one request from the socket, hands it to the engine on a blocking
//! worker, writes the response, and closes. One request per connection; no
//! keep-alive.

use std::sync::Arc;

use anyhow::Context;
use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::handler::Engine;

pub struct Connection {
    stream: TcpStream,
    engine: Arc<Engine>,
    buffer: BytesMut,
    max_request_bytes: usize,
}

impl Connection {
    pub fn new(stream: TcpStream, engine: Arc<Engine>, max_request_bytes: usize) -> Self {
        Self {
            stream,
            engine,
            buffer: BytesMut::with_capacity(4096),
            max_request_bytes,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let raw = match self.read_request().await? {
            Some(raw) => raw,
            None => return Ok(()), // peer closed without sending anything
        };

        let engine = Arc::clone(&self.engine);
        let response = tokio::task::spawn_blocking(move || engine.handle(&raw))
            .await
            .context("Engine task failed")?;

        self.write_response(&response).await?;

        self.stream.flush().await?;
        self.stream.shutdown().await?;
        Ok(())
    }

    /// Reads until the request looks complete, the peer closes, or the
    /// buffer passes the request size cap (the engine then answers the
    /// oversize with 400).
    async fn read_request(&mut self) -> anyhow::Result<Option<Bytes>> {
        loop {
            if request_complete(&self.buffer) {
                break;
            }

            // One byte over the cap is enough for the engine to reject it
            if self.buffer.len() > self.max_request_bytes {
                break;
            }

            let n = self
                .stream
                .read_buf(&mut self.buffer)
                .await
                .context("Failed to read from connection")?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                break; // peer closed; hand over whatever arrived
            }
        }

        Ok(Some(std::mem::take(&mut self.buffer).freeze()))
    }

    async fn write_response(&mut self, response: &[u8]) -> anyhow::Result<()> {
        let mut written = 0;

        while written < response.len() {
            let n = self.stream.write(&response[written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            written += n;
        }

        Ok(())
    }
}

/// A request is complete once the header separator has arrived and the body
/// holds at least as many bytes as the declared Content-Length. An absent or
/// unparseable declaration counts as zero.
fn request_complete(buf: &[u8]) -> bool {
    let Some(i) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };

    let declared = declared_content_length(&buf[..i]).unwrap_or(0);
    buf.len() - (i + 4) >= declared
}

fn declared_content_length(head: &[u8]) -> Option<usize> {
    let head = std::str::from_utf8(head).ok()?;

    head.split("\r\n").skip(1).find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if key.trim().eq_ignore_ascii_case("Content-Length") {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}
