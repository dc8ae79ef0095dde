use crate::http::request::Request;

/// Longest method token accepted, in bytes.
pub const MAX_METHOD_BYTES: usize = 15;
/// Longest request target accepted, in bytes.
pub const MAX_TARGET_BYTES: usize = 511;
/// Longest version token accepted, in bytes.
pub const MAX_VERSION_BYTES: usize = 15;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    RequestTooLarge,
    InvalidUtf8,
    MalformedRequestLine,
    MethodTooLong,
    TargetTooLong,
    VersionTooLong,
}

/// Parses one raw request into a [`Request`].
///
/// The request line must be exactly three tokens separated by single spaces.
/// A missing `\r\n\r\n` separator is not an error; it yields a request
/// without a body.
pub fn parse_request(buf: &[u8], max_bytes: usize) -> Result<Request, ParseError> {
    if buf.len() > max_bytes {
        return Err(ParseError::RequestTooLarge);
    }

    // Split at the header/body separator. Everything after the first
    // separator is body, untouched; no separator means no body.
    let (head, body) = match find_headers_end(buf) {
        Some(i) => (&buf[..i], Some(buf[i + 4..].to_vec())),
        None => (buf, None),
    };

    let head_str = std::str::from_utf8(head).map_err(|_| ParseError::InvalidUtf8)?;

    let mut lines = head_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::MalformedRequestLine)?;
    let mut parts = request_line.split(' ');

    let method = parts.next().ok_or(ParseError::MalformedRequestLine)?;
    let path = parts.next().ok_or(ParseError::MalformedRequestLine)?;
    let version = parts.next().ok_or(ParseError::MalformedRequestLine)?;

    if parts.next().is_some() {
        return Err(ParseError::MalformedRequestLine);
    }

    // split(' ') yields empty tokens for doubled or leading spaces
    if method.is_empty() || path.is_empty() || version.is_empty() {
        return Err(ParseError::MalformedRequestLine);
    }

    if method.len() > MAX_METHOD_BYTES {
        return Err(ParseError::MethodTooLong);
    }
    if path.len() > MAX_TARGET_BYTES {
        return Err(ParseError::TargetTooLong);
    }
    if version.len() > MAX_VERSION_BYTES {
        return Err(ParseError::VersionTooLong);
    }

    // Header lines are kept verbatim, in order, up to the first empty line
    let mut headers = Vec::new();

    for line in lines {
        if line.is_empty() {
            break;
        }
        headers.push(line.to_string());
    }

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    })
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
