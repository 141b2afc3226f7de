use anyhow::Context;
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::config::StaticFilesConfig;
use crate::http::line_reader::LineReader;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::{Method, Request};
use crate::http::resolver::{Resolved, resolve};
use crate::http::responder;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Handles one accepted socket: parse one request, write one response,
/// close. No keep-alive; the next request needs a new connection.
pub struct Connection {
    stream: TcpStream,
    files: StaticFilesConfig,
    chunk_size: usize,
}

impl Connection {
    pub fn new(stream: TcpStream, files: StaticFilesConfig, chunk_size: usize) -> Self {
        Self {
            stream,
            files,
            chunk_size,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut lines = LineReader::new(&mut self.stream, self.chunk_size);

        let response = match parse_request(&mut lines).await {
            Ok(request) => {
                let response = Self::dispatch(&request, &self.files).await;
                info!(
                    method = request.method.as_str(),
                    path = %request.path,
                    status = response.status.as_u16(),
                    "request handled"
                );
                response
            }
            // Transport failure, not a protocol error; nothing to answer
            Err(ParseError::Io(e)) => {
                return Err(e).context("reading request");
            }
            Err(e) => {
                warn!(error = ?e, "malformed request");
                Response::bad_request()
            }
        };

        drop(lines);

        ResponseWriter::new(response)
            .write_to_stream(&mut self.stream, self.chunk_size)
            .await
            .context("writing response")
    }

    /// Routes a parsed request to a response. Non-GET methods are refused
    /// before any path resolution or filesystem access happens.
    async fn dispatch(request: &Request, files: &StaticFilesConfig) -> Response {
        if request.method != Method::GET {
            return Response::method_not_allowed();
        }

        match resolve(&request.path, &files.root, &files.index_file) {
            Resolved::Within(path) => responder::respond(&path).await,
            Resolved::OutsideRoot => {
                // Same bytes as a plain miss; traversal probes learn nothing
                warn!(path = %request.path, "path escapes server root");
                Response::not_found()
            }
        }
    }
}
