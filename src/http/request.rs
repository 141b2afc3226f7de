use std::collections::HashMap;

/// HTTP request methods.
///
/// Only GET is serviceable by this server; everything else is parsed and
/// rejected with 405 Method Not Allowed by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other token, kept uppercased for diagnostics
    Other(String),
}

impl Method {
    /// Parses a method token, uppercasing it first. Never fails: unknown
    /// tokens are carried through as [`Method::Other`] so the dispatcher can
    /// answer them with 405 rather than treating them as a parse error.
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(s) => s,
        }
    }
}

/// A parsed HTTP request: request line plus header block.
///
/// Built once per connection from a finite prefix of the stream and
/// immutable afterwards. Bodies are out of scope; any body bytes stay in
/// the line reader's remainder, unparsed.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method, uppercased
    pub method: Method,
    /// The request path verbatim, query string included (e.g. "/a?q=1")
    pub path: String,
    /// HTTP version token, read but not validated
    pub version: String,
    /// Headers with lowercased names; duplicate names last-one-wins
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Looks up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|v| v.as_str())
    }
}
