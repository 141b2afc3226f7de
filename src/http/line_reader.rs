use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

/// The 2-byte sequence terminating each protocol line. A bare LF is data,
/// not a delimiter.
const DELIMITER: &[u8] = b"\r\n";

/// One pull from a [`LineReader`].
#[derive(Debug, PartialEq, Eq)]
pub enum LineEvent {
    /// A complete line with its CRLF delimiter stripped
    Line(Vec<u8>),
    /// The empty line separating headers from any body
    EndOfHeaders,
    /// The peer closed the stream before a full line was available
    EndOfStream,
}

/// Incrementally splits a byte stream into CRLF-terminated lines.
///
/// Raw reads land in an internal buffer; lines are extracted from the front
/// as soon as a delimiter is present, so a single large read can satisfy
/// several `next_line` calls without touching the socket again. The buffer
/// only ever holds bytes not yet confirmed to belong to a complete line.
pub struct LineReader<R> {
    stream: R,
    buffer: BytesMut,
    scratch: Vec<u8>,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(stream: R, chunk_size: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::new(),
            // One reusable read buffer; its length bounds each socket read
            scratch: vec![0u8; chunk_size],
        }
    }

    /// Returns the next complete line, reading from the stream as needed.
    ///
    /// A zero-length line (delimiter at the front of the buffer) is reported
    /// as [`LineEvent::EndOfHeaders`]. A zero-byte read before a delimiter
    /// shows up is [`LineEvent::EndOfStream`]; whatever partial line sits in
    /// the buffer at that point is never handed out as if it were complete.
    pub async fn next_line(&mut self) -> std::io::Result<LineEvent> {
        loop {
            // Serve from the buffer first
            if let Some(pos) = self.buffer.windows(2).position(|w| w == DELIMITER) {
                let line = self.buffer.split_to(pos);
                self.buffer.advance(DELIMITER.len());

                if line.is_empty() {
                    return Ok(LineEvent::EndOfHeaders);
                }
                return Ok(LineEvent::Line(line.to_vec()));
            }

            let n = self.stream.read(&mut self.scratch).await?;

            if n == 0 {
                return Ok(LineEvent::EndOfStream);
            }

            self.buffer.extend_from_slice(&self.scratch[..n]);
        }
    }

    /// Bytes already read off the stream but not consumed as lines.
    ///
    /// After [`LineEvent::EndOfHeaders`] this is the start of any request
    /// body; this reader does not parse past that boundary.
    pub fn remainder(&self) -> &[u8] {
        &self.buffer
    }
}
