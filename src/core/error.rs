//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type covering the tool registry and
//! the transport layer. Tool-level failures (empty command, network error)
//! never appear here: those are reported to the caller inside a successful
//! protocol response with the error flag set.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),

    /// I/O errors from signal handling or network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
