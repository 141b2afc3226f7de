use tokio::fs::File;

/// HTTP status codes this server can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// Response payload: either in-memory bytes (the fixed error pages) or an
/// open file streamed out by the writer without buffering it whole.
#[derive(Debug)]
pub enum Body {
    Bytes(Vec<u8>),
    File { file: File, len: u64 },
}

impl Body {
    /// Exact byte length declared in the Content-length header.
    pub fn len(&self) -> u64 {
        match self {
            Body::Bytes(bytes) => bytes.len() as u64,
            Body::File { len, .. } => *len,
        }
    }
}

/// A complete HTTP response: status line plus exactly two headers
/// (Content-type, Content-length) plus body.
///
/// Headers are fixed fields rather than a map so that serialization is
/// deterministic; two 404s must be indistinguishable on the wire whether
/// they came from a missing file or a path escaping the root.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Body,
}

impl Response {
    /// A 200 response streaming an open file of known length.
    pub fn ok_file(file: File, len: u64, content_type: &str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: content_type.to_string(),
            body: Body::File { file, len },
        }
    }

    fn fixed(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            content_type: "text/plain".to_string(),
            body: Body::Bytes(body.as_bytes().to_vec()),
        }
    }

    /// Fixed 404 payload. Shared by missing files and sandboxed-out paths.
    pub fn not_found() -> Self {
        Self::fixed(StatusCode::NotFound, "Not Found")
    }

    /// Fixed 400 payload for any parse failure.
    pub fn bad_request() -> Self {
        Self::fixed(StatusCode::BadRequest, "Bad Request")
    }

    /// Fixed 405 payload for any method other than GET.
    pub fn method_not_allowed() -> Self {
        Self::fixed(StatusCode::MethodNotAllowed, "Method Not Allowed")
    }
}
