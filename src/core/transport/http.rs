//! Streamable HTTP transport implementation.
//!
//! MCP over HTTP: clients post JSON-RPC messages to a single endpoint and
//! receive responses either directly or over an event stream on the same
//! path. The rmcp streamable HTTP service handles sessions and message
//! framing; this module binds the listener, serves the service on a
//! background task, and exposes a handle that drives the graceful shutdown
//! (stop accepting, drain in-flight work under a deadline, then cancel
//! whatever remains).

use std::net::SocketAddr;
use std::time::Duration;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::McpServer;

/// Streamable HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Handle to a running HTTP transport.
///
/// Dropping the handle leaves the server running; call [`HttpHandle::shutdown`]
/// to stop it.
pub struct HttpHandle {
    local_addr: SocketAddr,
    /// Signals the serve loop to stop accepting connections and drain.
    shutdown_ct: CancellationToken,
    task: JoinHandle<TransportResult<()>>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Bind the listener and start serving on a background task.
    ///
    /// Binding happens before this returns, so an unusable address surfaces
    /// here as a fatal error rather than inside the background task.
    pub async fn start(self, server: McpServer) -> TransportResult<HttpHandle> {
        let addr = self.resolve_addr().await?;

        let service = StreamableHttpService::new(
            move || Ok(server.clone()),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig {
                sse_keep_alive: Some(self.config.keep_alive),
                stateful_mode: true,
                ..Default::default()
            },
        );
        let router = axum::Router::new().nest_service(self.config.path.as_str(), service);

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| TransportError::bind(self.config.address(), e))?;
        let local_addr = listener.local_addr()?;

        let shutdown_ct = CancellationToken::new();
        let serve_ct = shutdown_ct.clone();
        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move { serve_ct.cancelled().await })
                .await
                .map_err(|e| TransportError::http(e.to_string()))
        });

        info!(
            "Ready - listening on {}{} (MCP over streamable HTTP, keep-alive {}s)",
            local_addr,
            self.config.path,
            self.config.keep_alive.as_secs()
        );

        Ok(HttpHandle {
            local_addr,
            shutdown_ct,
            task,
        })
    }

    /// Resolve the configured host:port to a socket address.
    async fn resolve_addr(&self) -> TransportResult<SocketAddr> {
        let address = self.config.address();
        tokio::net::lookup_host(address.clone())
            .await?
            .next()
            .ok_or_else(|| TransportError::Resolve(address))
    }
}

impl HttpHandle {
    /// The address the listener actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting new connections and drain in-flight calls, bounded by
    /// `grace`. Calls still running when the deadline passes are cancelled.
    pub async fn shutdown(mut self, grace: Duration) -> TransportResult<()> {
        self.shutdown_ct.cancel();

        match tokio::time::timeout(grace, &mut self.task).await {
            Err(_) => {
                self.task.abort();
                Err(TransportError::DrainTimeout(grace))
            }
            Ok(Err(join_err)) => Err(TransportError::http(join_err.to_string())),
            Ok(Ok(result)) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use rmcp::ServiceExt;
    use rmcp::model::{
        CallToolRequestParam, CallToolResult, ClientCapabilities, ClientInfo, Implementation,
        RawContent,
    };
    use rmcp::service::{RoleClient, RunningService};
    use rmcp::transport::StreamableHttpClientTransport;

    fn test_transport(port: u16) -> HttpTransport {
        let mut config = HttpConfig::default();
        config.host = "127.0.0.1".to_string();
        config.port = port;
        HttpTransport::new(config)
    }

    fn test_server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    async fn connect(handle: &HttpHandle) -> RunningService<RoleClient, ClientInfo> {
        let uri = format!("http://{}/mcp", handle.local_addr());
        let info = ClientInfo {
            protocol_version: Default::default(),
            capabilities: ClientCapabilities::default(),
            client_info: Implementation {
                name: "transport-test-client".to_string(),
                version: "0.0.1".to_string(),
                ..Default::default()
            },
        };
        info.serve(StreamableHttpClientTransport::from_uri(uri))
            .await
            .unwrap()
    }

    fn result_text(result: &CallToolResult) -> String {
        let content = result.content.first().expect("result has content");
        match &content.raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_start_and_shutdown() {
        let handle = test_transport(0).start(test_server()).await.unwrap();
        assert_ne!(handle.local_addr().port(), 0);
        handle.shutdown(Duration::from_secs(5)).await.unwrap();
    }

    #[tokio::test]
    async fn test_bind_failure_is_fatal() {
        let first = test_transport(0).start(test_server()).await.unwrap();
        let taken = first.local_addr().port();

        let result = test_transport(taken).start(test_server()).await;
        assert!(matches!(result, Err(TransportError::Bind { .. })));

        first.shutdown(Duration::from_secs(5)).await.unwrap();
    }

    #[tokio::test]
    async fn test_resolve_rejects_unknown_host() {
        let mut config = HttpConfig::default();
        config.host = "definitely-not-a-real-host.invalid".to_string();
        let result = HttpTransport::new(config).start(test_server()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_tool_call_round_trip() {
        let handle = test_transport(0).start(test_server()).await.unwrap();
        let client = connect(&handle).await;

        let tools = client.list_tools(Default::default()).await.unwrap();
        let names: Vec<_> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"cmd"));
        assert!(names.contains(&"fetch"));

        let result = client
            .call_tool(CallToolRequestParam {
                name: "cmd".into(),
                arguments: serde_json::json!({ "cmd": "echo round trip" })
                    .as_object()
                    .cloned(),
            })
            .await
            .unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "round trip\n");

        let _ = client.cancel().await;
        handle.shutdown(Duration::from_secs(5)).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_param_is_protocol_error() {
        let handle = test_transport(0).start(test_server()).await.unwrap();
        let client = connect(&handle).await;

        // A missing required parameter is rejected before the handler runs:
        // the caller sees a protocol error, never a tool result.
        let missing = client
            .call_tool(CallToolRequestParam {
                name: "cmd".into(),
                arguments: None,
            })
            .await;
        assert!(missing.is_err());

        // Unknown tool names are rejected the same way.
        let unknown = client
            .call_tool(CallToolRequestParam {
                name: "no-such-tool".into(),
                arguments: None,
            })
            .await;
        assert!(unknown.is_err());

        // The session stays usable afterwards; tool-level failures come back
        // as results with the error flag set.
        let result = client
            .call_tool(CallToolRequestParam {
                name: "fetch".into(),
                arguments: serde_json::json!({ "url": "ftp://example.com" })
                    .as_object()
                    .cloned(),
            })
            .await
            .unwrap();
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "url must http url");

        let _ = client.cancel().await;
        handle.shutdown(Duration::from_secs(5)).await.unwrap();
    }
}
