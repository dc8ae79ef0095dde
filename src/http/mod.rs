//! HTTP/1.0-style protocol implementation.
//!
//! This layer owns the byte-level protocol work: parsing a raw request
//! buffer and assembling an exact response byte sequence. It performs no
//! socket or file I/O.
//!
//! # Architecture
//!
//! - **`buffer`**: bounds-checked append-only output buffer every response
//!   is assembled through
//! - **`parser`**: parses incoming requests from byte buffers
//! - **`request`**: parsed request representation and header lookups
//! - **`response`**: response representation, serialization, and the error
//!   responder
//! - **`mime`**: Content-Type classification by file extension
//!
//! # Message framing
//!
//! Requests are the classic line-oriented form:
//!
//! ```text
//! METHOD SP PATH SP VERSION CRLF
//! (Header-Name: value CRLF)*
//! CRLF
//! [body bytes]
//! ```
//!
//! Responses always carry a Date header, and a Content-Length computed from
//! the actual body so framing can never lie about length:
//!
//! ```text
//! VERSION SP CODE SP REASON CRLF
//! Date: YYYY-MM-DD HH:MM:SS UTC CRLF
//! Content-Length: N CRLF
//! Content-Type: mime CRLF
//! [Location: path CRLF]
//! CRLF
//! [body bytes, exactly N]
//! ```

pub mod buffer;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
