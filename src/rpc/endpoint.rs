//! A single RPC endpoint and its last observed health

use super::envelope::RpcRequest;
use super::methods::GET_BLOCK_COUNT;
use super::transport::Transport;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

/// Status code of a healthy response
pub const HTTP_OK: u16 = 200;

/// Timeout for a health probe
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Request id used by health probes
const PROBE_ID: u64 = 1;

/// Last observed health of an endpoint. All fields are unset until probed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndpointHealth {
    /// HTTP status of the last probe
    pub status: Option<u16>,
    /// Chain height reported by the last successful probe
    pub height: Option<u64>,
    /// Round-trip latency of the last probe
    pub elapsed_micros: Option<u64>,
}

impl EndpointHealth {
    /// Whether the last probe returned the success status
    pub fn is_ok(&self) -> bool {
        self.status == Some(HTTP_OK)
    }

    /// Ask `address` for its chain height and record what came back.
    ///
    /// Never fails: a transport error yields an all-unset record.
    pub async fn probe(transport: &dyn Transport, address: &str) -> Self {
        let request = RpcRequest::new(GET_BLOCK_COUNT, None, PROBE_ID).to_value();

        let response = match transport.post(address, &request, PROBE_TIMEOUT).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(endpoint = address, error = %e, "endpoint probe failed");
                return Self::default();
            }
        };

        let mut health = Self {
            status: Some(response.status),
            height: None,
            elapsed_micros: Some(response.elapsed_micros()),
        };

        if health.is_ok() {
            health.height = response
                .body
                .as_ref()
                .and_then(|body| body.get("result"))
                .and_then(parse_height);

            if health.height.is_none() {
                tracing::warn!(endpoint = address, "probe response carried no usable height");
            }
        }

        tracing::debug!(
            endpoint = address,
            status = response.status,
            height = ?health.height,
            elapsed_us = ?health.elapsed_micros,
            "endpoint probed"
        );

        health
    }
}

/// Nodes report the height as a number, some as a decimal string
fn parse_height(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A configured RPC endpoint.
///
/// Two endpoints are equal when their addresses are equal, whatever their
/// health. Use [`Endpoint::compare_rank`] to order them by health.
#[derive(Debug, Clone)]
pub struct Endpoint {
    address: String,
    health: EndpointHealth,
}

impl Endpoint {
    /// Create an endpoint that has not been probed yet
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            health: EndpointHealth::default(),
        }
    }

    /// Create an endpoint with known health
    pub fn with_health(address: impl Into<String>, health: EndpointHealth) -> Self {
        Self {
            address: address.into(),
            health,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn health(&self) -> EndpointHealth {
        self.health
    }

    pub fn status(&self) -> Option<u16> {
        self.health.status
    }

    pub fn height(&self) -> Option<u64> {
        self.health.height
    }

    pub fn elapsed_micros(&self) -> Option<u64> {
        self.health.elapsed_micros
    }

    /// Overwrite the health record
    pub fn set_health(&mut self, health: EndpointHealth) {
        self.health = health;
    }

    /// Probe this endpoint and replace its health record with the outcome
    pub async fn probe(&mut self, transport: &dyn Transport) {
        self.health = EndpointHealth::probe(transport, &self.address).await;
    }

    /// Rank against another endpoint. `Less` means `self` is the better pick.
    ///
    /// 1. A non-200 endpoint ranks below a 200 one; two non-200 endpoints tie.
    /// 2. Between healthy endpoints the higher chain height wins; an unknown
    ///    height ranks below any known height.
    /// 3. On equal heights the lower latency wins. Latencies that are unset
    ///    or zero count as unknown: a known latency beats an unknown one and
    ///    two unknowns tie.
    pub fn compare_rank(&self, other: &Endpoint) -> Ordering {
        match (self.health.is_ok(), other.health.is_ok()) {
            (false, false) => Ordering::Equal,
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (true, true) => other
                .health
                .height
                .cmp(&self.health.height)
                .then_with(|| {
                    compare_latency(self.health.elapsed_micros, other.health.elapsed_micros)
                }),
        }
    }
}

fn compare_latency(a: Option<u64>, b: Option<u64>) -> Ordering {
    let known = |us: Option<u64>| us.filter(|&us| us > 0);

    match (known(a), known(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Endpoint {}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field<T: fmt::Display>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
        }

        write!(
            f,
            "[{}] {} {} {}",
            self.address,
            field(self.health.status),
            field(self.health.height),
            field(self.health.elapsed_micros)
        )
    }
}
