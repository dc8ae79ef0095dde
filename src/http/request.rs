/// Request methods implemented by the engine.
///
/// The method token is matched case-sensitively. Tokens that parse cleanly
/// but name any other method (including lowercase spellings of these two)
/// are answered with 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a file under the served root
    GET,
    /// POST - Store the request body as a file under the served root
    POST,
}

/// Represents a parsed request.
///
/// Carries the three request-line tokens plus the header lines exactly as
/// they arrived, in order. The body field distinguishes a request that never
/// had a header separator (`None`) from one whose separator was present but
/// followed by nothing (`Some` with zero bytes).
#[derive(Debug, Clone)]
pub struct Request {
    /// Method token from the request line (e.g. "GET")
    pub method: String,
    /// Request target from the request line (e.g. "/index.html")
    pub path: String,
    /// Version token from the request line (e.g. "HTTP/1.0")
    pub version: String,
    /// Header lines verbatim, in arrival order
    pub headers: Vec<String>,
    /// Bytes after the header separator, if the separator was present
    pub body: Option<Vec<u8>>,
}

impl Method {
    /// Parses a request-line method token.
    ///
    /// # Arguments
    ///
    /// * `token` - Method token exactly as it appeared on the request line
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the token names a supported method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use cubby::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            _ => None,
        }
    }
}

impl Request {
    /// Retrieves a header value by name (case-insensitive, first match wins).
    ///
    /// Header lines are stored verbatim, so lookup splits each line at the
    /// first `:` and compares the trimmed name.
    ///
    /// # Arguments
    ///
    /// * `name` - Header name to look up
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the trimmed header value if present, `None` otherwise.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            if key.trim().eq_ignore_ascii_case(name) {
                Some(value.trim())
            } else {
                None
            }
        })
    }

    /// Retrieves the Content-Length header value parsed as a usize.
    ///
    /// Returns `None` if the header is missing or does not parse as a number.
    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length").and_then(|v| v.parse().ok())
    }
}
