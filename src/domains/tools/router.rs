//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every tool goes through the registry so that duplicate names are caught
//! at bootstrap, before the server accepts any call.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{CmdTool, FetchTool};
use super::error::ToolError;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> Result<ToolRouter<S>, ToolError>
where
    S: Send + Sync + 'static,
{
    let mut registry = ToolRegistry::new();
    registry.register(CmdTool::create_route())?;
    registry.register(FetchTool::create_route())?;
    Ok(registry.into_router())
}
