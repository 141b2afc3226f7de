use crate::http::line_reader::{LineEvent, LineReader};
use crate::http::request::{Method, Request};
use std::collections::HashMap;
use tokio::io::AsyncRead;

#[derive(Debug)]
pub enum ParseError {
    /// Peer closed the stream before the header block was complete
    StreamEnded,
    /// Request line missing or not exactly three space-separated fields
    MalformedRequestLine,
    /// Header line without a `:` separator (or not valid UTF-8)
    MalformedHeaderLine,
    /// Transport failure while reading; not a protocol error
    Io(std::io::Error),
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Consumes the request line and header block from `lines` and produces a
/// [`Request`], or fails without emitting anything partial.
///
/// The request line must split on single spaces into exactly three fields;
/// the version field is kept but not validated. Header names are trimmed and
/// lowercased, values left-trimmed only, and a repeated name keeps its last
/// value. The stream ending anywhere before the blank end-of-headers line is
/// an incomplete request, not a truncated-but-valid one.
pub async fn parse_request<R: AsyncRead + Unpin>(
    lines: &mut LineReader<R>,
) -> Result<Request, ParseError> {
    let request_line = match lines.next_line().await? {
        LineEvent::Line(bytes) => {
            String::from_utf8(bytes).map_err(|_| ParseError::MalformedRequestLine)?
        }
        LineEvent::EndOfHeaders => return Err(ParseError::MalformedRequestLine),
        LineEvent::EndOfStream => return Err(ParseError::StreamEnded),
    };

    // Split on single spaces: exactly three fields, no more, no fewer
    let fields: Vec<&str> = request_line.split(' ').collect();
    let &[method, path, version] = fields.as_slice() else {
        return Err(ParseError::MalformedRequestLine);
    };

    let method = Method::from_token(method);
    let path = path.to_string();
    let version = version.to_string();

    let mut headers = HashMap::new();

    loop {
        match lines.next_line().await? {
            LineEvent::EndOfHeaders => break,
            LineEvent::EndOfStream => return Err(ParseError::StreamEnded),
            LineEvent::Line(bytes) => {
                let line =
                    String::from_utf8(bytes).map_err(|_| ParseError::MalformedHeaderLine)?;

                // Split on the first ':' only; values may contain more
                let (name, value) = line.split_once(':').ok_or(ParseError::MalformedHeaderLine)?;

                headers.insert(
                    name.trim().to_lowercase(),
                    value.trim_start().to_string(),
                );
            }
        }
    }

    Ok(Request {
        method,
        path,
        version,
        headers,
    })
}
