//! ontrpc CLI - JSON-RPC client for Ontology nodes

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use ontrpc::{CallOptions, ConfigFile, Endpoint, Network, RpcClient, RpcSettings};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();

    let config_path = cli.config.clone().unwrap_or_else(ConfigFile::default_path);

    if let Commands::Config { action } = &cli.command {
        return cli::config::handle(action, &config_path);
    }

    let settings = build_settings(&cli, &config_path)?;
    let client = RpcClient::new(settings)?;

    if !cli.quiet {
        tracing::info!(
            endpoints = client.settings().rpc_list().len(),
            "client ready"
        );
    }

    match &cli.command {
        Commands::Endpoints { action } => cli::endpoints::handle(action, &client).await,
        Commands::Rpc(action) => {
            if cli.setup {
                client.setup_endpoints().await;
                if !cli.quiet {
                    eprintln!("Using {}", client.default_endpoint().await?);
                }
            }

            let explicit = cli.endpoint.as_deref().map(Endpoint::new);
            let mut opts = CallOptions::new();
            if let Some(endpoint) = &explicit {
                opts = opts.with_endpoint(endpoint);
            }
            if let Some(id) = cli.id {
                opts = opts.with_id(id);
            }

            cli::rpc::handle(action, &client, opts).await
        }
        Commands::Config { .. } => Ok(()),
    }
}

/// Resolve endpoint addresses: `--rpc` wins, then `--network`, then the
/// config file, then the privnet default.
fn build_settings(cli: &Cli, config_path: &std::path::Path) -> anyhow::Result<RpcSettings> {
    if !cli.rpc_urls.is_empty() {
        return Ok(RpcSettings::from_list(cli.rpc_urls.iter().cloned()));
    }

    if let Some(network) = &cli.network {
        let network: Network = network.parse()?;
        return Ok(RpcSettings::for_network(network));
    }

    if config_path.exists() {
        let config = ConfigFile::load(config_path)?;
        return Ok(config.to_settings()?);
    }

    Ok(RpcSettings::default())
}
