//! Transport configuration types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Streamable HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host address or name to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the MCP endpoint. Clients post JSON-RPC messages here and
    /// receive responses directly or over an event stream on the same path.
    #[serde(default = "default_path")]
    pub path: String,

    /// Keep-alive interval for idle event streams. A comment event is sent
    /// at this cadence so intermediaries do not time the connection out.
    #[serde(default = "default_keep_alive", with = "keep_alive_secs")]
    pub keep_alive: Duration,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_path() -> String {
    "/mcp".to_string()
}

fn default_keep_alive() -> Duration {
    Duration::from_secs(30)
}

/// Serialize the keep-alive interval as whole seconds.
mod keep_alive_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(deserializer)?))
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            keep_alive: default_keep_alive(),
        }
    }
}

impl HttpConfig {
    /// The `host:port` string this transport listens on.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("streamable HTTP on {}{}", self.address(), self.path)
    }
}
