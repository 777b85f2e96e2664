//! Configuration management for the MCP server.
//!
//! The configuration is built exactly once, at startup, from parsed
//! command-line flags. It is immutable for the lifetime of the process and
//! threaded explicitly into the lifecycle manager.

use serde::{Deserialize, Serialize};

use super::transport::HttpConfig;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Create a configuration listening on the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        let mut config = Self::default();
        config.transport.host = host.into();
        config.transport.port = port;
        config
    }

    /// Build the configuration from parsed flags, with the log level
    /// optionally overridden by `MCP_LOG_LEVEL` (a `.env` file is honored).
    pub fn load(host: impl Into<String>, port: u16) -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::new(host, port);

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}
