//! CLI command modules
//!
//! Each subcommand group has its own module with argument definitions and handlers.

pub mod config;
pub mod endpoints;
pub mod rpc;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ontrpc")]
#[command(version, about = "JSON-RPC client for Ontology nodes with health-ranked endpoints")]
#[command(after_help = r#"EXAMPLES:
    # Current height from the best TestNet node
    ontrpc --network testnet --setup height

    # Block by height or hash
    ontrpc block 12344

    # Invoke a contract
    ontrpc invoke d7678dd97c000be3f33e9362e673101bac4ca654 \
        '[{"type":7,"value":"symbol"},{"type":16,"value":[]}]'

    # Probe and rank MainNet seed nodes
    ontrpc --network mainnet endpoints probe

CONFIG FILE:
    Default: ~/.config/ontrpc/config.toml
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Network preset (mainnet, testnet, privnet)
    #[arg(long, env = "ONTRPC_NETWORK", global = true)]
    pub network: Option<String>,

    /// Use only this RPC endpoint (can be repeated)
    #[arg(long = "rpc", action = clap::ArgAction::Append, global = true)]
    pub rpc_urls: Vec<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Probe all endpoints before calling, so the best one is used
    #[arg(long, global = true)]
    pub setup: bool,

    /// Send the call to this address instead of the best endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request id to send
    #[arg(long, global = true)]
    pub id: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Rpc(rpc::RpcCommands),

    /// Manage and probe RPC endpoints
    Endpoints {
        #[command(subcommand)]
        action: endpoints::EndpointCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: config::ConfigCommands,
    },
}
