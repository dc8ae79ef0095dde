use std::fs::File;
use std::io::{ErrorKind, Read};

use crate::handler::{HandlerError, ResolvedPath};
use crate::http::mime::content_type_for;
use crate::http::response::{Response, StatusCode};

/// Reads the target file and builds its 200 response.
///
/// A short read (fewer bytes than the file's reported size) is an I/O
/// failure, not a partial response: a truncated body under a full
/// Content-Length would corrupt the client's framing.
pub fn serve(path: &ResolvedPath, version: &str) -> Result<Response, HandlerError> {
    let mut file = File::open(path.as_str()).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HandlerError::NotFound,
        _ => HandlerError::Io,
    })?;

    let size = file.metadata().map_err(|_| HandlerError::Io)?.len();
    let size = usize::try_from(size).map_err(|_| HandlerError::Io)?;

    let mut contents = vec![0u8; size];
    file.read_exact(&mut contents).map_err(|_| HandlerError::Io)?;

    Ok(Response::new(version, StatusCode::Ok)
        .header("Content-Type", content_type_for(path.as_str()))
        .body(contents))
}
