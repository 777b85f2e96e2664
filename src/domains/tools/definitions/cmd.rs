//! Command execution tool definition.
//!
//! Runs an external program directly (no shell) and returns its combined
//! stdout and stderr as text. The command line is split on runs of
//! whitespace: the first token names the program, the remaining tokens are
//! its arguments, so there is no quoting and an argument cannot contain a
//! space. The subprocess inherits the parent's environment.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::process::Stdio;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use super::common::{error_result, success_result};

/// Parameters for the command execution tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CmdParams {
    /// The command line to run.
    #[schemars(
        description = "Command line to execute: the first token is the program, the rest are its arguments"
    )]
    pub cmd: String,
}

/// Command execution tool - spawns a program and captures its output.
pub struct CmdTool;

impl CmdTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "cmd";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Execute a command. The input is split on whitespace \
        and run directly without a shell; returns the combined stdout and stderr of the process.";

    /// Execute the tool logic.
    ///
    /// Failures of the command itself (empty input, spawn error, non-zero
    /// exit) are reported as error results, never as protocol errors. If
    /// the cancellation token fires, the subprocess is killed and the call
    /// returns an error result.
    #[instrument(skip_all, fields(cmd = %params.cmd))]
    pub async fn execute(params: &CmdParams, ct: CancellationToken) -> CallToolResult {
        let line = params.cmd.trim();
        if line.is_empty() {
            return error_result("invalid command");
        }

        let mut tokens = line.split_whitespace();
        let Some(program) = tokens.next() else {
            return error_result("invalid command");
        };

        info!("Running command: {}", line);

        let mut command = Command::new(program);
        command
            .args(tokens)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => return error_result(&format!("exec {}", e)),
        };

        // wait_with_output() owns the child, so when cancellation wins the
        // race the dropped future takes the subprocess down with it.
        let output = tokio::select! {
            () = ct.cancelled() => return error_result("exec cancelled"),
            result = child.wait_with_output() => match result {
                Ok(output) => output,
                Err(e) => return error_result(&format!("exec {}", e)),
            },
        };

        if !output.status.success() {
            return error_result(&format!("exec {}", output.status));
        }

        // All bytes from both streams are present; ordering across the two
        // streams is not guaranteed.
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        success_result(String::from_utf8_lossy(&combined).into_owned())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CmdParams>(),
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
                let params: CmdParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, ct).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::testing::result_text;
    use super::*;
    use std::time::{Duration, Instant};

    fn params(cmd: &str) -> CmdParams {
        CmdParams {
            cmd: cmd.to_string(),
        }
    }

    fn is_error(result: &CallToolResult) -> bool {
        result.is_error.unwrap_or(false)
    }

    #[test]
    fn test_cmd_param_is_required() {
        let missing = serde_json::from_value::<CmdParams>(serde_json::json!({}));
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn test_empty_command() {
        for cmd in ["", "   ", " \t \n "] {
            let result = CmdTool::execute(&params(cmd), CancellationToken::new()).await;
            assert!(is_error(&result));
            assert_eq!(result_text(&result), "invalid command");
        }
    }

    #[tokio::test]
    async fn test_single_token_command() {
        let result = CmdTool::execute(&params("echo"), CancellationToken::new()).await;
        assert!(!is_error(&result));
        assert_eq!(result_text(&result), "\n");
    }

    #[tokio::test]
    async fn test_tokenized_arguments() {
        let result = CmdTool::execute(&params("echo a b"), CancellationToken::new()).await;
        assert!(!is_error(&result));
        assert_eq!(result_text(&result), "a b\n");
    }

    #[tokio::test]
    async fn test_whitespace_runs_collapse() {
        let result = CmdTool::execute(&params("  echo   a \t b  "), CancellationToken::new()).await;
        assert!(!is_error(&result));
        assert_eq!(result_text(&result), "a b\n");
    }

    #[tokio::test]
    async fn test_no_shell_interpretation() {
        let result = CmdTool::execute(&params("echo $HOME"), CancellationToken::new()).await;
        assert!(!is_error(&result));
        assert_eq!(result_text(&result), "$HOME\n");
    }

    #[tokio::test]
    async fn test_spawn_failure() {
        let result = CmdTool::execute(
            &params("definitely-not-a-real-program-for-tests"),
            CancellationToken::new(),
        )
        .await;
        assert!(is_error(&result));
        assert!(result_text(&result).starts_with("exec "));
    }

    #[tokio::test]
    async fn test_nonzero_exit() {
        let result = CmdTool::execute(&params("false"), CancellationToken::new()).await;
        assert!(is_error(&result));
        assert!(result_text(&result).starts_with("exec "));
    }

    #[tokio::test]
    async fn test_cancellation_kills_subprocess() {
        let ct = CancellationToken::new();
        let child_ct = ct.clone();
        let start = Instant::now();

        let task = tokio::spawn(async move {
            CmdTool::execute(&params("sleep 30"), child_ct).await
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        ct.cancel();

        let result = task.await.unwrap();
        assert!(is_error(&result));
        assert_eq!(result_text(&result), "exec cancelled");
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
