//! RPC commands - direct node RPC calls

use clap::Subcommand;
use ontrpc::{BlockRef, CallOptions, RpcClient};
use serde_json::Value;

#[derive(Subcommand)]
pub enum RpcCommands {
    /// Get current block height
    Height,

    /// Get hash of the highest block
    BestBlockHash,

    /// Get a block by height or hash
    Block {
        /// Block height or hash
        block: BlockRef,
    },

    /// Get the hash of the block at a height
    BlockHash {
        /// Block height
        height: u64,
    },

    /// Get a contract state by its hash
    ContractState {
        /// Contract hash
        hash: String,
    },

    /// Get a transaction by hash
    Tx {
        /// Transaction hash
        hash: String,
    },

    /// Invoke a contract (read-only, nothing is submitted)
    Invoke {
        /// Contract hash
        hash: String,

        /// Contract parameters as a JSON array
        #[arg(default_value = "[]")]
        params: String,
    },

    /// Submit a serialized transaction
    SendRawTx {
        /// Transaction bytes, hex encoded
        tx: String,
    },

    /// Get the node version
    Version,
}

pub async fn handle(
    action: &RpcCommands,
    client: &RpcClient,
    opts: CallOptions<'_>,
) -> anyhow::Result<()> {
    let result = match action {
        RpcCommands::Height => client.get_height(opts).await?,

        RpcCommands::BestBlockHash => client.get_best_blockhash(opts).await?,

        RpcCommands::Block { block } => client.get_block(block.clone(), opts).await?,

        RpcCommands::BlockHash { height } => client.get_block_hash(*height, opts).await?,

        RpcCommands::ContractState { hash } => client.get_contract_state(hash, opts).await?,

        RpcCommands::Tx { hash } => client.get_transaction(hash, opts).await?,

        RpcCommands::Invoke { hash, params } => {
            let params: Vec<Value> = serde_json::from_str(params)
                .map_err(|e| anyhow::anyhow!("Invalid contract parameters: {}", e))?;
            client.invoke_contract(hash, params, opts).await?
        }

        RpcCommands::SendRawTx { tx } => {
            let tx = parse_hex(tx)?;
            client.send_raw_tx(tx, opts).await?
        }

        RpcCommands::Version => client.get_version(opts).await?,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Strip an optional `0x` prefix and check the rest is hex
fn parse_hex(input: &str) -> anyhow::Result<&str> {
    let stripped = input.strip_prefix("0x").unwrap_or(input);
    hex::decode(stripped).map_err(|e| anyhow::anyhow!("Invalid transaction hex: {}", e))?;
    Ok(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0x80000120").unwrap(), "80000120");
        assert_eq!(parse_hex("80000120").unwrap(), "80000120");
        assert!(parse_hex("0xzz").is_err());
        assert!(parse_hex("abc").is_err());
    }
}
