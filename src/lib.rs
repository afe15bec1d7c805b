//! ontrpc - JSON-RPC client for Ontology nodes
//!
//! Keeps a pool of node endpoints, ranks them by health (status, chain
//! height, latency) and sends JSON-RPC 2.0 calls to the best one or to an
//! explicitly chosen endpoint.
//!
//! # Example
//!
//! ```rust,no_run
//! use ontrpc::{CallOptions, Network, RpcClient, RpcSettings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RpcClient::connect(RpcSettings::for_network(Network::Testnet)).await?;
//!
//!     let best = client.default_endpoint().await?;
//!     println!("Using {}", best);
//!
//!     let height = client.get_height(CallOptions::new()).await?;
//!     println!("Height: {}", height);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod rpc;

// Re-exports for convenience
pub use client::{CallOptions, RpcClient, CALL_TIMEOUT};
pub use config::{ConfigFile, Network, RpcSettings};
pub use error::{ConfigError, Error, Result, RpcError, TransportError};
pub use rpc::{
    default_endpoints, BlockRef, Endpoint, EndpointHealth, EndpointPool, HttpTransport,
    RpcRequest, Transport, TransportResponse,
};
