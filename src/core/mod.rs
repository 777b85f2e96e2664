//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the server handler, process
//! lifecycle management, and the transport layer.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use lifecycle::Lifecycle;
pub use server::McpServer;
pub use transport::{HttpConfig, HttpTransport};
