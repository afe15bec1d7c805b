//! Named network presets

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network whose seed nodes should be used as endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    /// Local node on the default RPC port
    #[default]
    Privnet,
}

impl Network {
    /// All known presets
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Privnet];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "MainNet",
            Network::Testnet => "TestNet (Polaris)",
            Network::Privnet => "PrivNet",
        }
    }

    /// Short identifier used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Privnet => "privnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" | "polaris" => Ok(Network::Testnet),
            "privnet" | "priv" | "local" => Ok(Network::Privnet),
            other => Err(ConfigError::InvalidNetwork(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("TestNet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("polaris".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("local".parse::<Network>().unwrap(), Network::Privnet);
        assert!("moonnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
    }
}
