//! Pool of RPC endpoints ranked by health

use crate::rpc::{Endpoint, EndpointHealth, Transport};
use futures::future::join_all;
use tokio::sync::RwLock;

/// The set of configured endpoints.
///
/// Endpoints keep their configured order; duplicates are kept as given.
/// Health is only refreshed by [`EndpointPool::setup`].
#[derive(Debug)]
pub struct EndpointPool {
    endpoints: RwLock<Vec<Endpoint>>,
}

impl EndpointPool {
    /// Create a pool with one unprobed endpoint per address
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_endpoints(addresses.into_iter().map(Endpoint::new).collect())
    }

    /// Create a pool from endpoints that may already carry health data
    pub fn from_endpoints(endpoints: Vec<Endpoint>) -> Self {
        Self {
            endpoints: RwLock::new(endpoints),
        }
    }

    /// Get number of endpoints
    pub async fn len(&self) -> usize {
        self.endpoints.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.endpoints.read().await.is_empty()
    }

    /// Snapshot of all endpoints in configured order
    pub async fn endpoints(&self) -> Vec<Endpoint> {
        self.endpoints.read().await.clone()
    }

    /// Probe every endpoint and store the results.
    ///
    /// Probes run concurrently; results come back in address order and are
    /// written to the record at the same index.
    pub async fn setup(&self, transport: &dyn Transport) {
        let addresses: Vec<String> = self
            .endpoints
            .read()
            .await
            .iter()
            .map(|e| e.address().to_string())
            .collect();

        tracing::debug!(count = addresses.len(), "probing endpoints");

        let probes = addresses
            .iter()
            .map(|address| EndpointHealth::probe(transport, address));
        let results = join_all(probes).await;

        let mut endpoints = self.endpoints.write().await;
        for (endpoint, health) in endpoints.iter_mut().zip(results) {
            endpoint.set_health(health);
        }

        let healthy = endpoints.iter().filter(|e| e.health().is_ok()).count();
        tracing::info!(healthy, total = endpoints.len(), "endpoint probe complete");
    }

    /// The best endpoint by [`Endpoint::compare_rank`].
    ///
    /// Among equally ranked endpoints the first in configured order wins, so
    /// repeated calls return the same endpoint while health is unchanged.
    /// Returns `None` for an empty pool.
    pub async fn best_endpoint(&self) -> Option<Endpoint> {
        self.endpoints
            .read()
            .await
            .iter()
            .min_by(|a, b| a.compare_rank(b))
            .cloned()
    }

    /// All endpoints sorted best first
    pub async fn ranked(&self) -> Vec<Endpoint> {
        let mut ranked = self.endpoints().await;
        ranked.sort_by(|a, b| a.compare_rank(b));
        ranked
    }

    /// List all endpoint addresses
    pub async fn list_endpoints(&self) -> Vec<String> {
        self.endpoints
            .read()
            .await
            .iter()
            .map(|e| e.address().to_string())
            .collect()
    }
}
