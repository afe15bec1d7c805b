//! JSON-RPC request envelope and response unwrapping

use serde::Serialize;
use serde_json::Value;

/// Protocol version sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// A single JSON-RPC request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

impl RpcRequest {
    /// Build a request; missing params become an empty list
    pub fn new(method: impl Into<String>, params: Option<Vec<Value>>, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: method.into(),
            params: params.unwrap_or_default(),
            id,
        }
    }

    /// The request as a JSON value
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "jsonrpc": self.jsonrpc,
            "method": self.method,
            "params": self.params,
            "id": self.id,
        })
    }
}

/// Take the `result` member out of a response body, or return the body as is
/// when there is none.
pub fn unwrap_result(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("result") => {
            map.remove("result").unwrap_or(Value::Null)
        }
        other => other,
    }
}
