//! Common helpers shared across tool definitions.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Create an error result with the given message.
///
/// Tool failures are reported this way rather than as protocol errors: the
/// call itself succeeds and the caller inspects the error flag.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}
