//! Default RPC endpoints for each network preset

use crate::config::Network;

/// Default port for the JSON-RPC interface of a node
pub const DEFAULT_RPC_PORT: u16 = 20336;

/// Get default endpoint addresses for a network
pub fn default_endpoints(network: Network) -> Vec<String> {
    match network {
        Network::Mainnet => mainnet_endpoints(),
        Network::Testnet => testnet_endpoints(),
        Network::Privnet => vec![format!("http://127.0.0.1:{}", DEFAULT_RPC_PORT)],
    }
}

/// MainNet seed nodes
fn mainnet_endpoints() -> Vec<String> {
    (1..=5)
        .map(|i| format!("seed{}.ont.io:{}", i, DEFAULT_RPC_PORT))
        .collect()
}

/// Polaris TestNet nodes
fn testnet_endpoints() -> Vec<String> {
    (1..=4)
        .map(|i| format!("polaris{}.ont.io:{}", i, DEFAULT_RPC_PORT))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_seeds() {
        let endpoints = default_endpoints(Network::Mainnet);
        assert_eq!(endpoints.first().map(String::as_str), Some("seed1.ont.io:20336"));
        assert_eq!(endpoints.last().map(String::as_str), Some("seed5.ont.io:20336"));
    }

    #[test]
    fn test_testnet_seeds() {
        let endpoints = default_endpoints(Network::Testnet);
        assert_eq!(endpoints.len(), 4);
        assert!(endpoints.iter().all(|e| e.starts_with("polaris")));
    }
}
