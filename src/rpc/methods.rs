//! Typed node RPC methods

use crate::client::{CallOptions, RpcClient};
use crate::error::Result;
use serde::Serialize;
use serde_json::{json, Value};

// methods that read data
pub const GET_BEST_BLOCK_HASH: &str = "getbestblockhash";
pub const GET_BLOCK: &str = "getblock";
pub const GET_BLOCK_COUNT: &str = "getblockcount";
pub const GET_BLOCK_HASH: &str = "getblockhash";
pub const GET_CONTRACT_STATE: &str = "getcontractstate";
pub const GET_RAW_TRANSACTION: &str = "getrawtransaction";
pub const GET_VERSION: &str = "getversion";
// invocation
pub const INVOKE: &str = "invoke";
// submission
pub const SEND_RAW_TRANSACTION: &str = "sendrawtransaction";

/// Verbose flag asking the node for JSON instead of serialized bytes
const VERBOSE: u8 = 1;

/// A block identified by height or by hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BlockRef {
    Height(u64),
    Hash(String),
}

impl From<u64> for BlockRef {
    fn from(height: u64) -> Self {
        BlockRef::Height(height)
    }
}

impl From<&str> for BlockRef {
    fn from(hash: &str) -> Self {
        BlockRef::Hash(hash.to_string())
    }
}

impl From<String> for BlockRef {
    fn from(hash: String) -> Self {
        BlockRef::Hash(hash)
    }
}

impl std::str::FromStr for BlockRef {
    type Err = std::convert::Infallible;

    /// Decimal input is a height, anything else a hash
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(height) => BlockRef::Height(height),
            Err(_) => BlockRef::Hash(s.to_string()),
        })
    }
}

impl RpcClient {
    /// Get the current height of the blockchain
    pub async fn get_height(&self, opts: CallOptions<'_>) -> Result<Value> {
        self.call(GET_BLOCK_COUNT, None, opts).await
    }

    /// Get the hash of the highest block
    pub async fn get_best_blockhash(&self, opts: CallOptions<'_>) -> Result<Value> {
        self.call(GET_BEST_BLOCK_HASH, None, opts).await
    }

    /// Look up a block by height or hash
    pub async fn get_block(
        &self,
        height_or_hash: impl Into<BlockRef>,
        opts: CallOptions<'_>,
    ) -> Result<Value> {
        let block: BlockRef = height_or_hash.into();
        let params = vec![json!(block), json!(VERBOSE)];
        self.call(GET_BLOCK, Some(params), opts).await
    }

    /// Get the hash of the block at `height`
    pub async fn get_block_hash(&self, height: u64, opts: CallOptions<'_>) -> Result<Value> {
        self.call(GET_BLOCK_HASH, Some(vec![json!(height)]), opts)
            .await
    }

    /// Get a contract state object by its hash
    pub async fn get_contract_state(
        &self,
        contract_hash: &str,
        opts: CallOptions<'_>,
    ) -> Result<Value> {
        self.call(GET_CONTRACT_STATE, Some(vec![json!(contract_hash)]), opts)
            .await
    }

    /// Look up a transaction by hash
    pub async fn get_transaction(&self, tx_hash: &str, opts: CallOptions<'_>) -> Result<Value> {
        let params = vec![json!(tx_hash), json!(VERBOSE)];
        self.call(GET_RAW_TRANSACTION, Some(params), opts).await
    }

    /// Invoke a contract with a list of contract parameters, e.g.
    /// `[{"type": 7, "value": "symbol"}, {"type": 16, "value": []}]`
    pub async fn invoke_contract(
        &self,
        contract_hash: &str,
        params: Vec<Value>,
        opts: CallOptions<'_>,
    ) -> Result<Value> {
        let params = vec![json!(contract_hash), Value::Array(params)];
        self.call(INVOKE, Some(params), opts).await
    }

    /// Submit a hex-encoded serialized transaction
    pub async fn send_raw_tx(&self, serialized_tx: &str, opts: CallOptions<'_>) -> Result<Value> {
        self.call(SEND_RAW_TRANSACTION, Some(vec![json!(serialized_tx)]), opts)
            .await
    }

    /// Get the version of the node. Not every node implements this.
    pub async fn get_version(&self, opts: CallOptions<'_>) -> Result<Value> {
        self.call(GET_VERSION, None, opts).await
    }
}
