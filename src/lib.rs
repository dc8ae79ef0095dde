//! Cubby - Minimal HTTP/1.0 File Server
//!
//! Core library turning raw request bytes into response bytes over a
//! served directory root.

pub mod config;
pub mod handler;
pub mod http;
pub mod server;
