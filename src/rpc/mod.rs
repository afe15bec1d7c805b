//! Endpoint management, request envelopes and the node method surface

mod defaults;
mod endpoint;
mod envelope;
pub mod methods;
mod pool;
pub(crate) mod transport;

pub use defaults::{default_endpoints, DEFAULT_RPC_PORT};
pub use endpoint::{Endpoint, EndpointHealth, HTTP_OK, PROBE_TIMEOUT};
pub use envelope::{unwrap_result, RpcRequest, JSONRPC_VERSION};
pub use methods::BlockRef;
pub use pool::EndpointPool;
pub use transport::{normalize_address, HttpTransport, Transport, TransportResponse};
