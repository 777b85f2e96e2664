//! Process lifecycle management.
//!
//! The lifecycle runs the server through four phases: created, listening,
//! shutting down, stopped. The transport is started on a background task
//! (binding eagerly, so a bind failure is fatal and propagates), the main
//! task blocks on a termination signal, and the first signal triggers
//! exactly one drain of in-flight work before the process exits.

use std::time::Duration;

use tracing::{info, warn};

use super::config::Config;
use super::server::McpServer;
use super::transport::HttpTransport;
use crate::core::Result;

/// How long the drain of in-flight connections is allowed to take before
/// shutdown gives up and reports a timeout.
const DRAIN_GRACE: Duration = Duration::from_secs(10);

/// Lifecycle manager - owns startup and orderly shutdown of the server.
pub struct Lifecycle {
    config: Config,
}

impl Lifecycle {
    /// Create a new lifecycle manager for the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the server until a termination signal arrives, then drain.
    ///
    /// Errors before the listening state (duplicate tool registration, bind
    /// failure) propagate and terminate the process with a non-zero exit.
    /// Errors during the drain are logged and do not change the exit path.
    pub async fn run(self) -> Result<()> {
        let server = McpServer::new(self.config.clone())?;

        let transport = HttpTransport::new(self.config.transport.clone());
        let handle = transport.start(server).await?;

        let signal = wait_for_termination().await?;
        info!("{} received: gracefully shutting down", signal);

        if let Err(e) = handle.shutdown(DRAIN_GRACE).await {
            warn!("server shutdown error: {}", e);
        }

        info!("Server stopped");
        Ok(())
    }
}

/// Block until a termination signal is delivered and report which one.
///
/// SIGINT and SIGTERM are hooked. SIGKILL cannot be intercepted on any
/// platform, and SIGABRT tears the process down without an orderly path, so
/// neither gets a handler. Signals arriving after the first are ignored:
/// the streams are dropped and the shutdown sequence runs exactly once.
#[cfg(unix)]
async fn wait_for_termination() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn wait_for_termination() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}
