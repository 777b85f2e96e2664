//! MCP tool server library.
//!
//! This crate implements a small Model Context Protocol (MCP) server that
//! exposes two tools to remote clients over a streamable HTTP transport:
//!
//! - `cmd`: run an external program (no shell) and return its combined output
//! - `fetch`: perform an HTTP GET and return the raw response body
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler, the
//!   transport layer, and process lifecycle management
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the tool registry and the individual tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use ops_mcp_server::core::{Config, Lifecycle};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("localhost", 8000);
//!     Lifecycle::new(config).run().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Lifecycle, McpServer, Result};
