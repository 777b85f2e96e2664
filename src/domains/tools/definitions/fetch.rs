//! URL fetch tool definition.
//!
//! Performs an outbound HTTP GET and returns the raw response body as text.
//! The HTTP status code is deliberately not interpreted: a 404 or 500 body
//! comes back as a normal result, and only transport or body-read failures
//! set the error flag. Callers that care about status must encode it in the
//! body on the serving side.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use super::common::{error_result, success_result};

/// Parameters for the fetch tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FetchParams {
    /// The URL to fetch.
    #[schemars(description = "URL to fetch with an HTTP GET request; must start with 'http'")]
    pub url: String,
}

/// Fetch tool - issues an HTTP GET and returns the body verbatim.
pub struct FetchTool;

impl FetchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fetch";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch a URL with an HTTP GET request and return the \
        raw response body as text. The status code is not inspected.";

    /// Execute the tool logic.
    ///
    /// The scheme check is a literal prefix test on `http`, nothing more;
    /// anything else is rejected without touching the network. Cancellation
    /// aborts the request or the body read and returns an error result.
    #[instrument(skip_all, fields(url = %params.url))]
    pub async fn execute(params: &FetchParams, ct: CancellationToken) -> CallToolResult {
        if !params.url.starts_with("http") {
            return error_result("url must http url");
        }

        info!("Fetching URL: {}", params.url);

        let response = tokio::select! {
            () = ct.cancelled() => return error_result("http get cancelled"),
            result = reqwest::get(&params.url) => match result {
                Ok(response) => response,
                Err(e) => return error_result(&format!("http get {}", e)),
            },
        };

        let body = tokio::select! {
            () = ct.cancelled() => return error_result("read response cancelled"),
            result = response.bytes() => match result {
                Ok(bytes) => bytes,
                Err(e) => return error_result(&format!("read response {}", e)),
            },
        };

        success_result(String::from_utf8_lossy(&body).into_owned())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FetchParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the registry.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let ct = ctx.request_context.ct.clone();
            async move {
                let params: FetchParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, ct).await)
            }
            .boxed()
        })
    }
}
