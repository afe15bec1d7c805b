//! RPC endpoint management commands

use clap::Subcommand;
use ontrpc::RpcClient;

#[derive(Subcommand)]
pub enum EndpointCommands {
    /// List all configured endpoints
    List,

    /// Probe every endpoint and print them best first
    Probe,
}

pub async fn handle(action: &EndpointCommands, client: &RpcClient) -> anyhow::Result<()> {
    match action {
        EndpointCommands::List => {
            for address in client.pool().list_endpoints().await {
                println!("{}", address);
            }
        }

        EndpointCommands::Probe => {
            client.setup_endpoints().await;

            println!(
                "{:<4} {:<40} {:>6} {:>10} {:>12}",
                "#", "ENDPOINT", "STATUS", "HEIGHT", "LATENCY(us)"
            );
            for (rank, endpoint) in client.pool().ranked().await.iter().enumerate() {
                println!(
                    "{:<4} {:<40} {:>6} {:>10} {:>12}",
                    rank + 1,
                    endpoint.address(),
                    field(endpoint.status()),
                    field(endpoint.height()),
                    field(endpoint.elapsed_micros()),
                );
            }
        }
    }

    Ok(())
}

fn field<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
