//! Configuration management commands

use clap::Subcommand;
use ontrpc::{ConfigFile, Network};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show config file path
    Path,

    /// Set the default network
    SetNetwork {
        /// mainnet, testnet or privnet
        network: String,
    },

    /// Show current config
    Show,
}

pub fn handle(action: &ConfigCommands, path: &Path) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Path => {
            println!("{}", path.display());
        }

        ConfigCommands::SetNetwork { network } => {
            let network: Network = network.parse()?;
            let mut config = if path.exists() {
                ConfigFile::load(path)?
            } else {
                ConfigFile::default()
            };
            config.network = network;
            config.save(path)?;
            println!("Default network set to {}.", network.display_name());
        }

        ConfigCommands::Show => {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                println!("# {}\n", path.display());
                println!("{}", content);
            } else {
                println!("No config file found at: {}", path.display());
                println!("\nCreate one with:");
                println!("  ontrpc config set-network testnet");
            }
        }
    }

    Ok(())
}
