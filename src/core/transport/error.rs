//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to bind to address.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The configured host name could not be resolved to an address.
    #[error("Cannot resolve listen address {0}")]
    Resolve(String),

    /// IO error during transport.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP server failed while serving.
    #[error("HTTP error: {0}")]
    Http(String),

    /// In-flight connections did not drain before the shutdown deadline.
    #[error("Shutdown drain timed out after {0:?}")]
    DrainTimeout(std::time::Duration),
}

impl TransportError {
    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    /// Create an HTTP error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}
