use std::fs::File;
use std::io::Write;

use crate::config::PostConfig;
use crate::handler::{HandlerError, ResolvedPath};
use crate::http::mime::{FALLBACK_TYPE, content_type_for};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};

/// Stores the request body at the target path and builds the 200 response.
///
/// A request without a payload stores nothing and fails with
/// [`HandlerError::NoBody`] (answered as 204); the target file is neither
/// created nor truncated. A present but zero-length body gets the same
/// treatment unless `opts.create_empty_files` is set.
///
/// The response echoes the stored bytes back, with `Location` naming where
/// they landed and `Content-Type` taken from the inbound request when it
/// sent one, else classified from the target path.
pub fn store(
    path: &ResolvedPath,
    version: &str,
    request: &Request,
    opts: &PostConfig,
) -> Result<Response, HandlerError> {
    let body = request.body.as_deref().ok_or(HandlerError::NoBody)?;

    if body.is_empty() && !opts.create_empty_files {
        return Err(HandlerError::NoBody);
    }

    if opts.require_content_length && !body.is_empty() && request.content_length().is_none() {
        return Err(HandlerError::LengthRequired);
    }

    let inbound_type = request.header("Content-Type");

    if opts.restrict_media_types
        && inbound_type.is_none()
        && content_type_for(path.as_str()) == FALLBACK_TYPE
    {
        return Err(HandlerError::UnsupportedMedia);
    }

    let mut file = File::create(path.as_str()).map_err(|_| HandlerError::Io)?;
    file.write_all(body).map_err(|_| HandlerError::Io)?;

    let content_type = match inbound_type {
        Some(t) => t.to_string(),
        None => content_type_for(path.as_str()).to_string(),
    };

    Ok(Response::new(version, StatusCode::Ok)
        .header("Content-Type", content_type)
        .header("Location", path.as_str())
        .body(body.to_vec()))
}
