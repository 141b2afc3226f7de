//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 static file server: one
//! request per connection, headers only, CRLF line endings mandatory.
//!
//! # Architecture
//!
//! Each connection runs the same pipeline once:
//!
//! ```text
//!   ┌────────────┐    ┌─────────┐    ┌──────────┐    ┌───────────┐
//!   │ LineReader │ ─▶ │  parser │ ─▶ │ resolver │ ─▶ │ responder │
//!   └────────────┘    └─────────┘    └──────────┘    └───────────┘
//!    buffer chunked    request line    sandbox the     open + stream
//!    reads, split on   + header map    path under      the file, or
//!    CRLF               or 400         the root        404
//! ```
//!
//! - **`line_reader`**: incremental CRLF line extraction from a chunked
//!   socket buffer
//! - **`parser`**: request line + header block into a [`request::Request`]
//! - **`request`**: request and method types
//! - **`resolver`**: URL path → filesystem path, constrained to the root
//! - **`responder`**: serves a resolved file or reports not-found
//! - **`response`**: status codes, bodies, and the fixed error payloads
//! - **`writer`**: serializes and streams responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//! - **`connection`**: ties the pipeline together for one socket

pub mod connection;
pub mod line_reader;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resolver;
pub mod responder;
pub mod response;
pub mod writer;
