//! Connection acceptance and driving
//!
//! The async shell around the synchronous engine: an accept loop plus a
//! per-connection driver that reads one request, runs the engine on a
//! blocking worker, and writes the response back.

pub mod connection;
pub mod listener;
