//! MCP Server Entry Point
//!
//! Parses command-line flags, initializes logging, builds the immutable
//! configuration, and hands control to the lifecycle manager, which runs
//! until a termination signal arrives.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use ops_mcp_server::core::{Config, Lifecycle};

/// Command-line flags for the server.
#[derive(Debug, Parser)]
#[command(name = "ops_mcp_server", version, about = "MCP server exposing cmd and fetch tools")]
struct Cli {
    /// Port for the HTTP server to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// IP address or hostname to bind.
    #[arg(long = "ip", default_value = "localhost")]
    ip: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Build configuration once from parsed flags; nothing reads these
    // values from ambient globals later.
    let config = Config::load(&cli.ip, cli.port);

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // A bind failure propagates out of run() and exits non-zero; the
    // graceful shutdown path returns Ok and exits zero.
    Lifecycle::new(config).run().await?;

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
