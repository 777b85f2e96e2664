//! MCP server handler.
//!
//! The handler owns the frozen tool router built at startup from the tool
//! registry. Tool dispatch, parameter validation, and result serialization
//! are handled by rmcp through the `#[tool_handler]` macro; each tool's
//! behavior lives in `domains/tools/definitions/`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// Cloned once per client session by the transport; the router and
/// configuration are read-only after construction.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the tool registry rejects a registration (duplicate tool
    /// name), which aborts startup before the server accepts any call.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        Ok(Self {
            tool_router: build_tool_router::<Self>()?,
            config: Arc::new(config),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server executes commands (cmd) and fetches URLs (fetch) on behalf of the caller."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_builds_with_default_config() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "ops_mcp_server");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_server_advertises_tool_capability() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
    }
}
