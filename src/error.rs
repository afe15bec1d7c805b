//! Error types for ontrpc

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// RPC-related errors
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Transport setup errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// RPC-specific errors
#[derive(Error, Debug)]
pub enum RpcError {
    /// A call could not be completed against the chosen endpoint
    #[error("Could not call method {method} with endpoint: {endpoint}: {source}")]
    TransportFailure {
        method: String,
        endpoint: String,
        #[source]
        source: TransportError,
    },

    #[error("No endpoints configured")]
    NoEndpoints,
}

impl RpcError {
    /// Method name carried by a transport failure
    pub fn method(&self) -> Option<&str> {
        match self {
            RpcError::TransportFailure { method, .. } => Some(method),
            _ => None,
        }
    }

    /// Endpoint address carried by a transport failure
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            RpcError::TransportFailure { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }
}

/// Errors raised by a [`Transport`](crate::rpc::Transport)
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientInit(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    InvalidFile(String),

    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    #[error("No endpoint addresses configured")]
    NoEndpoints,

    #[error("Config file parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
