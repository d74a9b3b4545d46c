//! Incoming HTTP request type.

/// An incoming HTTP request with its body fully buffered.
///
/// The router fills in [`captures`](Request::capture) from the matched route
/// pattern before the handler sees the request.
pub struct Request {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Vec<u8>,
    pub(crate) captures: Vec<String>,
}

impl Request {
    /// Builds a request without a body. Used by the server and by tests that
    /// drive [`Router::handle`](crate::Router::handle) in-process.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: Vec::new(),
            body: Vec::new(),
            captures: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub(crate) fn with_captures(mut self, captures: Vec<String>) -> Self {
        self.captures = captures;
        self
    }

    pub fn method(&self) -> &str { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &[(String, String)] { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the `index`-th capture group of the matched route, left to right.
    ///
    /// For a route `/items/update/([^/]+)`, `req.capture(0)` on
    /// `/items/update/42` returns `Some("42")`.
    pub fn capture(&self, index: usize) -> Option<&str> {
        self.captures.get(index).map(String::as_str)
    }

    /// All captures of the matched route, in pattern order.
    pub fn captures(&self) -> &[String] { &self.captures }
}
