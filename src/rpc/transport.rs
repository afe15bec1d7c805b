//! Transport collaborator: POSTs a JSON body to an address

use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::time::{Duration, Instant};

/// Outcome of a single POST that reached the server
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Time until the response headers arrived
    pub elapsed: Duration,
    /// Decoded JSON body, `None` when the body was not valid JSON
    pub body: Option<Value>,
}

impl TransportResponse {
    /// Whether the status is a 4xx/5xx error
    pub fn is_error_status(&self) -> bool {
        self.status >= 400
    }

    /// Latency in whole microseconds
    pub fn elapsed_micros(&self) -> u64 {
        u64::try_from(self.elapsed.as_micros()).unwrap_or(u64::MAX)
    }
}

/// A transport for JSON-RPC calls.
///
/// Implementations send one request and report what came back. They do not
/// interpret HTTP status codes; a 404 or 302 is a successful transport
/// outcome and only network-level problems are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(
        &self,
        address: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError>;
}

/// Default transport over HTTP using `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a fresh HTTP client.
    ///
    /// Redirects are not followed so their bodies reach the caller.
    pub fn new() -> Result<Self, TransportError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(5))
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!("ontrpc/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                tracing::error!(error = %e, "failed to build http client");
                TransportError::ClientInit(e.to_string())
            })?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Prefix `http://` onto addresses given as bare `host:port`
pub fn normalize_address(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        address: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        let url = normalize_address(address);
        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .json(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX))
                } else {
                    TransportError::Http(e)
                }
            })?;

        let elapsed = started.elapsed();
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).ok();

        tracing::trace!(url = %url, status, elapsed_us = elapsed.as_micros() as u64, "http post completed");

        Ok(TransportResponse {
            status,
            elapsed,
            body,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted in-memory transport for unit tests

    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    pub(crate) enum Reply {
        Respond(TransportResponse),
        Fail(String),
    }

    /// Replies per address; unknown addresses fail with a connection error
    #[derive(Default)]
    pub(crate) struct ScriptedTransport {
        replies: HashMap<String, Reply>,
        pub(crate) sent: Mutex<Vec<(String, Value)>>,
    }

    impl ScriptedTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn respond(mut self, address: &str, status: u16, micros: u64, body: Value) -> Self {
            self.replies.insert(
                address.to_string(),
                Reply::Respond(TransportResponse {
                    status,
                    elapsed: Duration::from_micros(micros),
                    body: Some(body),
                }),
            );
            self
        }

        pub(crate) fn fail(mut self, address: &str, reason: &str) -> Self {
            self.replies
                .insert(address.to_string(), Reply::Fail(reason.to_string()));
            self
        }

        pub(crate) fn sent(&self) -> Vec<(String, Value)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn post(
            &self,
            address: &str,
            body: &Value,
            _timeout: Duration,
        ) -> Result<TransportResponse, TransportError> {
            self.sent
                .lock()
                .unwrap()
                .push((address.to_string(), body.clone()));

            match self.replies.get(address) {
                Some(Reply::Respond(response)) => Ok(response.clone()),
                Some(Reply::Fail(reason)) => Err(TransportError::ConnectionFailed(reason.clone())),
                None => Err(TransportError::ConnectionFailed(
                    "connection refused".to_string(),
                )),
            }
        }
    }
}
