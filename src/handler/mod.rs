//! Request handling
//!
//! This module implements the file-serving core: path resolution under the
//! configured root, the GET and POST handlers, and the dispatcher that turns
//! one raw request buffer into one response byte sequence.

pub mod dispatch;
pub mod get;
pub mod post;
pub mod resolver;

pub use dispatch::Engine;
pub use resolver::ResolvedPath;

use crate::http::response::StatusCode;

/// Ways a routed GET or POST can fail.
///
/// Every variant converts to an error response; none propagate out of the
/// dispatcher.
#[derive(Debug, PartialEq, Eq)]
pub enum HandlerError {
    /// Target file does not exist
    NotFound,
    /// POST carried no payload to store
    NoBody,
    /// Open, stat, read, or write failed partway
    Io,
    /// POST payload without a parseable Content-Length header
    LengthRequired,
    /// Upload whose media type cannot be placed
    UnsupportedMedia,
}

impl HandlerError {
    /// Status code this failure answers with.
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::NotFound => StatusCode::NotFound,
            HandlerError::NoBody => StatusCode::NoContent,
            HandlerError::Io => StatusCode::InternalServerError,
            HandlerError::LengthRequired => StatusCode::LengthRequired,
            HandlerError::UnsupportedMedia => StatusCode::UnsupportedMediaType,
        }
    }
}
