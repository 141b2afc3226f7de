use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes the status line and header block, through the blank line.
///
/// Exactly two headers, always in the same order, so the same logical
/// response always produces the same bytes.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    format!(
        "{} {} {}\r\nContent-type: {}\r\nContent-length: {}\r\n\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase(),
        resp.content_type,
        resp.body.len(),
    )
    .into_bytes()
}

/// Writes a response to a stream: head first, then the body.
///
/// File bodies are copied in bounded chunks; the file's bytes go out
/// exactly as stored, with no transformation.
pub struct ResponseWriter {
    response: Response,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    pub async fn write_to_stream<W: AsyncWrite + Unpin>(
        self,
        stream: &mut W,
        chunk_size: usize,
    ) -> anyhow::Result<()> {
        stream.write_all(&serialize_head(&self.response)).await?;

        match self.response.body {
            Body::Bytes(bytes) => {
                stream.write_all(&bytes).await?;
            }
            Body::File { mut file, .. } => {
                let mut chunk = vec![0u8; chunk_size];
                loop {
                    let n = file.read(&mut chunk).await?;
                    if n == 0 {
                        break;
                    }
                    stream.write_all(&chunk[..n]).await?;
                }
            }
        }

        stream.flush().await?;
        Ok(())
    }
}
