//! Top-level request dispatch
//!
//! One raw request buffer in, one response byte sequence out. Parsing,
//! routing, and the conversion of every failure into an error response all
//! happen here; nothing propagates to the caller.

use bytes::Bytes;

use crate::config::EngineConfig;
use crate::handler::{HandlerError, get, post, resolver};
use crate::http::parser;
use crate::http::request::Method;
use crate::http::response::{Response, StatusCode, error_bytes};

/// The request engine.
///
/// Holds only configuration, so one instance can serve any number of
/// connections concurrently; the filesystem is the only shared state.
#[derive(Debug, Clone)]
pub struct Engine {
    cfg: EngineConfig,
}

impl Engine {
    /// Create an engine over the given serving configuration.
    pub fn new(cfg: EngineConfig) -> Self {
        Self { cfg }
    }

    /// Turns one raw request into its exact response bytes.
    ///
    /// This function is total: parse failures, refused targets, unsupported
    /// methods, and handler faults each map to an error response, and the
    /// error path itself degrades rather than failing.
    pub fn handle(&self, raw: &[u8]) -> Bytes {
        let request = match parser::parse_request(raw, self.cfg.max_request_bytes) {
            Ok(request) => request,
            Err(reason) => {
                tracing::warn!(reason = ?reason, "Rejected malformed request");
                return self.error(None, StatusCode::BadRequest);
            }
        };

        let method = match Method::from_str(&request.method) {
            Some(method) => method,
            None => {
                tracing::warn!(method = %request.method, "Method not implemented");
                return self.error(Some(&request.version), StatusCode::NotImplemented);
            }
        };

        let path = match resolver::resolve(&self.cfg.root, &request.path) {
            Ok(path) => path,
            Err(reason) => {
                tracing::warn!(
                    path = %request.path,
                    reason = ?reason,
                    "Refused request target"
                );
                return self.error(Some(&request.version), StatusCode::NotFound);
            }
        };

        let outcome = match method {
            Method::GET => get::serve(&path, &request.version),
            Method::POST => post::store(&path, &request.version, &request, &self.cfg.post),
        };

        match outcome {
            Ok(response) => {
                tracing::info!(
                    method = %request.method,
                    path = %request.path,
                    status = response.status.as_u16(),
                    "Request handled"
                );
                self.finish(response, &request.version)
            }
            Err(fault) => {
                let status = fault.status();
                match fault {
                    HandlerError::Io => tracing::error!(
                        method = %request.method,
                        path = %request.path,
                        "Filesystem operation failed"
                    ),
                    HandlerError::NoBody => tracing::info!(
                        method = %request.method,
                        path = %request.path,
                        status = status.as_u16(),
                        "Request handled"
                    ),
                    refusal => tracing::warn!(
                        method = %request.method,
                        path = %request.path,
                        fault = ?refusal,
                        "Request refused"
                    ),
                }
                self.error(Some(&request.version), status)
            }
        }
    }

    fn finish(&self, response: Response, version: &str) -> Bytes {
        match response.serialize(self.cfg.max_response_bytes) {
            Ok(bytes) => bytes,
            Err(overflow) => {
                tracing::error!(
                    attempted = overflow.attempted,
                    capacity = overflow.capacity,
                    "Response exceeded output capacity"
                );
                self.error(Some(version), StatusCode::InternalServerError)
            }
        }
    }

    fn error(&self, version: Option<&str>, status: StatusCode) -> Bytes {
        error_bytes(version, status, self.cfg.max_response_bytes)
    }
}
