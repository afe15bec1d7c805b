//! RPC client: resolves an endpoint and sends JSON-RPC envelopes to it

use crate::config::RpcSettings;
use crate::error::{ConfigError, Result, RpcError, TransportError};
use crate::rpc::{unwrap_result, Endpoint, EndpointPool, HttpTransport, RpcRequest, Transport};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Timeout for a regular RPC call
pub const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-call overrides
#[derive(Debug, Clone, Copy, Default)]
pub struct CallOptions<'a> {
    /// Correlation id; the client's counter is used when unset
    pub id: Option<u64>,
    /// Endpoint to call; the pool's best endpoint is used when unset
    pub endpoint: Option<&'a Endpoint>,
}

impl<'a> CallOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the request id
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder-style setter for the target endpoint
    pub fn with_endpoint(mut self, endpoint: &'a Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }
}

/// JSON-RPC client over a pool of node endpoints
pub struct RpcClient {
    /// Settings the pool was built from
    settings: RpcSettings,
    /// Configured endpoints
    pool: EndpointPool,
    /// Transport used for calls and probes
    transport: Arc<dyn Transport>,
    /// Next auto-assigned request id
    id_counter: AtomicU64,
}

impl RpcClient {
    /// Create a client over HTTP. Endpoints are not probed.
    pub fn new(settings: RpcSettings) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Self::with_transport(settings, Arc::new(transport))
    }

    /// Create a client over HTTP and probe every endpoint before returning
    pub async fn connect(settings: RpcSettings) -> Result<Self> {
        let client = Self::new(settings)?;
        client.setup_endpoints().await;
        Ok(client)
    }

    /// Create a client with a custom transport
    pub fn with_transport(settings: RpcSettings, transport: Arc<dyn Transport>) -> Result<Self> {
        if settings.rpc_list().is_empty() {
            return Err(ConfigError::NoEndpoints.into());
        }

        let pool = EndpointPool::new(settings.rpc_list().iter().cloned());

        Ok(Self {
            settings,
            pool,
            transport,
            id_counter: AtomicU64::new(0),
        })
    }

    pub fn settings(&self) -> &RpcSettings {
        &self.settings
    }

    pub fn pool(&self) -> &EndpointPool {
        &self.pool
    }

    /// Snapshot of all endpoints in configured order
    pub async fn endpoints(&self) -> Vec<Endpoint> {
        self.pool.endpoints().await
    }

    /// The endpoint calls go to when none is given
    pub async fn default_endpoint(&self) -> Result<Endpoint> {
        self.pool
            .best_endpoint()
            .await
            .ok_or_else(|| RpcError::NoEndpoints.into())
    }

    /// Probe all endpoints to refresh their health
    pub async fn setup_endpoints(&self) {
        self.pool.setup(self.transport.as_ref()).await;
    }

    /// Build a request envelope.
    ///
    /// The id counter advances on every call, also when `id` is supplied.
    pub fn build_request(
        &self,
        method: &str,
        params: Option<Vec<Value>>,
        id: Option<u64>,
    ) -> RpcRequest {
        let next = self.id_counter.fetch_add(1, Ordering::Relaxed);
        RpcRequest::new(method, params, id.unwrap_or(next))
    }

    /// Call `method` and return the `result` member of the response, or the
    /// whole response body when it has none.
    ///
    /// Network errors, 4xx/5xx statuses and non-JSON bodies are reported as
    /// [`RpcError::TransportFailure`].
    pub async fn call(
        &self,
        method: &str,
        params: Option<Vec<Value>>,
        opts: CallOptions<'_>,
    ) -> Result<Value> {
        let request = self.build_request(method, params, opts.id);

        let address = match opts.endpoint {
            Some(endpoint) => endpoint.address().to_string(),
            None => self.default_endpoint().await?.address().to_string(),
        };

        tracing::debug!(method, endpoint = %address, id = request.id, "rpc call");

        let failure = |source: TransportError| RpcError::TransportFailure {
            method: method.to_string(),
            endpoint: address.clone(),
            source,
        };

        let response = self
            .transport
            .post(&address, &request.to_value(), CALL_TIMEOUT)
            .await
            .map_err(failure)?;

        if response.is_error_status() {
            return Err(failure(TransportError::Status(response.status)).into());
        }

        let body = response.body.ok_or_else(|| {
            failure(TransportError::InvalidBody(
                "response body is not JSON".to_string(),
            ))
        })?;

        tracing::trace!(method, status = response.status, "rpc response");

        Ok(unwrap_result(body))
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("settings", &self.settings)
            .field("transport", &"<dyn Transport>")
            .field("id_counter", &self.id_counter)
            .finish()
    }
}
