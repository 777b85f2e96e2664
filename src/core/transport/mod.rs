//! Transport layer for the MCP server.
//!
//! The transport delivers validated tool calls to the server handler and
//! serializes results back to callers. It is a streamable HTTP server (MCP
//! over HTTP): clients post JSON-RPC messages to a single endpoint and
//! receive responses directly or over an event stream on the same path.
//! The transport owns capability negotiation, required-parameter validation
//! (a missing parameter is a protocol error that never reaches a handler),
//! per-call cancellation, keep-alive on idle streams, and graceful shutdown.

mod config;
mod error;
mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::{HttpHandle, HttpTransport};
