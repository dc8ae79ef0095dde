use bytes::Bytes;
use chrono::Utc;

use crate::http::buffer::{BufferOverflow, ResponseBuffer};

/// Version token used when a request failed before its version was read.
pub const DEFAULT_VERSION: &str = "HTTP/1.1";

/// Status codes produced by the engine.
///
/// - `Ok` (200): Request successful
/// - `NoContent` (204): POST without a payload; nothing stored
/// - `BadRequest` (400): Malformed or oversized request
/// - `NotFound` (404): Path rejected or file absent
/// - `LengthRequired` (411): POST payload without a Content-Length
/// - `UnsupportedMediaType` (415): Upload whose media type cannot be placed
/// - `InternalServerError` (500): I/O or serialization failure
/// - `NotImplemented` (501): Method outside GET/POST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 204 No Content
    NoContent,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 411 Length Required
    LengthRequired,
    /// 415 Unsupported Media Type
    UnsupportedMediaType,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use cubby::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NoContent => 204,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::LengthRequired => 411,
            StatusCode::UnsupportedMediaType => 415,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the fixed reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use cubby::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NoContent => "No Content",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::LengthRequired => "Length Required",
            StatusCode::UnsupportedMediaType => "Unsupported Media Type",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Current time formatted for the Date header.
pub fn http_date() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Represents a complete response ready to be serialized.
///
/// Headers beyond the fixed status line, Date, and Content-Length are kept
/// in insertion order so serialization is byte-deterministic.
#[derive(Debug)]
pub struct Response {
    /// Version token echoed into the status line
    pub version: String,
    /// The status code
    pub status: StatusCode,
    /// Timestamp the response was built
    pub date: String,
    /// Additional headers in insertion order
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Creates an empty response with the given version token and status.
    pub fn new(version: impl Into<String>, status: StatusCode) -> Self {
        Self {
            version: version.into(),
            status,
            date: http_date(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header.
    ///
    /// # Example
    ///
    /// ```ignore
    /// Response::new("HTTP/1.0", StatusCode::Ok)
    ///     .header("Content-Type", "text/plain")
    ///     .body(b"hello".to_vec())
    /// ```
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Creates the templated error response for `status`.
    ///
    /// When `version` is absent or empty (the request failed before its
    /// version token was read) the status line uses [`DEFAULT_VERSION`].
    pub fn error(version: Option<&str>, status: StatusCode) -> Self {
        let body = format!(
            "<html><head><title>Error</title></head><body><h1>{} {}</h1></body></html>",
            status.as_u16(),
            status.reason_phrase()
        );

        Response::new(version_or_default(version), status)
            .header("Content-Type", "text/html")
            .body(body.into_bytes())
    }

    /// Serializes the response into its exact wire bytes.
    ///
    /// Content-Length is computed from the body actually held, never from a
    /// caller-supplied number. Fails without partial output if the result
    /// would exceed `max_bytes`.
    pub fn serialize(&self, max_bytes: usize) -> Result<Bytes, BufferOverflow> {
        let mut out = ResponseBuffer::with_capacity(max_bytes);

        out.append(
            format!(
                "{} {} {}\r\n",
                self.version,
                self.status.as_u16(),
                self.status.reason_phrase()
            )
            .as_bytes(),
        )?;
        out.append(format!("Date: {}\r\n", self.date).as_bytes())?;
        out.append(format!("Content-Length: {}\r\n", self.body.len()).as_bytes())?;

        for (key, value) in &self.headers {
            out.append(format!("{}: {}\r\n", key, value).as_bytes())?;
        }

        out.append(b"\r\n")?;
        out.append(&self.body)?;

        Ok(out.freeze())
    }
}

/// Serialized error response for `status`, with a guaranteed fallback.
///
/// If even the small templated body overflows `max_bytes`, degrades to the
/// bare status line (built outside the capped buffer) so the caller always
/// has bytes to send back.
pub fn error_bytes(version: Option<&str>, status: StatusCode, max_bytes: usize) -> Bytes {
    match Response::error(version, status).serialize(max_bytes) {
        Ok(bytes) => bytes,
        Err(_) => Bytes::from(format!(
            "{} {} {}\r\n\r\n",
            version_or_default(version),
            status.as_u16(),
            status.reason_phrase()
        )),
    }
}

fn version_or_default(version: Option<&str>) -> &str {
    match version {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_VERSION,
    }
}
