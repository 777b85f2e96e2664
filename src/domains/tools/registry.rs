//! Tool Registry - central registration for all tools.
//!
//! The registry is append-only during bootstrap: each tool is registered
//! exactly once, duplicate names are rejected before the server starts
//! serving, and the finished registry is frozen into an rmcp `ToolRouter`
//! that never changes for the lifetime of the process.

use std::collections::HashSet;

use rmcp::handler::server::tool::{ToolRoute, ToolRouter};

use super::error::ToolError;

/// Tool registry - maps tool names to their descriptor and handler.
pub struct ToolRegistry<S> {
    routes: Vec<ToolRoute<S>>,
    names: HashSet<String>,
}

impl<S> ToolRegistry<S>
where
    S: Send + Sync + 'static,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Register a tool route.
    ///
    /// Fails with [`ToolError::DuplicateName`] if a tool with the same name
    /// was already registered.
    pub fn register(&mut self, route: ToolRoute<S>) -> Result<(), ToolError> {
        let name = route.attr.name.to_string();
        if !self.names.insert(name.clone()) {
            return Err(ToolError::duplicate_name(name));
        }
        self.routes.push(route);
        Ok(())
    }

    /// Look up a registered tool by name.
    ///
    /// Fails with [`ToolError::NotFound`] for unknown names.
    pub fn lookup(&self, name: &str) -> Result<&ToolRoute<S>, ToolError> {
        self.routes
            .iter()
            .find(|route| route.attr.name == name)
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Freeze the registry into the rmcp router used for dispatch.
    pub fn into_router(self) -> ToolRouter<S> {
        self.routes
            .into_iter()
            .fold(ToolRouter::new(), |router, route| router.with_route(route))
    }
}

impl<S> Default for ToolRegistry<S>
where
    S: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
