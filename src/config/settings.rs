//! Endpoint address list supplied to the client

use super::Network;
use crate::rpc::default_endpoints;

/// Holds the list of RPC addresses a client is built from.
///
/// Defaults to the local private network. Use one of the `setup` methods to
/// switch presets or supply a custom list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcSettings {
    rpc_list: Vec<String>,
}

impl RpcSettings {
    /// Settings for a named network preset
    pub fn for_network(network: Network) -> Self {
        Self {
            rpc_list: default_endpoints(network),
        }
    }

    /// Settings from an explicit list of addresses
    pub fn from_list<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rpc_list: addresses.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace the address list
    pub fn setup<I, S>(&mut self, addresses: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rpc_list = addresses.into_iter().map(Into::into).collect();
    }

    /// Replace the address list with a network preset
    pub fn setup_network(&mut self, network: Network) {
        self.rpc_list = default_endpoints(network);
    }

    pub fn setup_mainnet(&mut self) {
        self.setup_network(Network::Mainnet);
    }

    pub fn setup_testnet(&mut self) {
        self.setup_network(Network::Testnet);
    }

    pub fn setup_privnet(&mut self) {
        self.setup_network(Network::Privnet);
    }

    /// Configured addresses, in order
    pub fn rpc_list(&self) -> &[String] {
        &self.rpc_list
    }
}

impl Default for RpcSettings {
    fn default() -> Self {
        Self::for_network(Network::Privnet)
    }
}
