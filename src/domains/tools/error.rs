//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while building or querying the tool registry.
///
/// Runtime failures inside a tool (bad command, network error) are not
/// errors at this level; they are returned to the caller as tool results
/// with the error flag set.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A tool with this name is already registered.
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),
}

impl ToolError {
    /// Create a new "duplicate name" error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}
