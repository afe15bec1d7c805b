//! Configuration file handling

use super::{Network, RpcSettings};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Network preset used when no custom endpoints are listed
    #[serde(default)]
    pub network: Network,

    /// Custom endpoint addresses (replace the preset when non-empty)
    #[serde(default)]
    pub endpoints: Vec<String>,

    /// Disabled endpoints
    #[serde(default)]
    pub disabled_endpoints: DisabledEndpoints,
}

/// Disabled endpoints configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisabledEndpoints {
    /// List of addresses to disable
    #[serde(default)]
    pub urls: Vec<String>,
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ontrpc")
            .join("config.toml")
    }

    /// Load from default path
    pub fn load_default() -> Result<Option<Self>> {
        let path = Self::default_path();
        if path.exists() {
            Ok(Some(Self::load(&path)?))
        } else {
            Ok(None)
        }
    }

    /// Load from a specific path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save to a specific path
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::InvalidFile(format!("Failed to create directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidFile(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::InvalidFile(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Check if an endpoint address is disabled
    pub fn is_endpoint_disabled(&self, url: &str) -> bool {
        self.disabled_endpoints.urls.iter().any(|u| u == url)
    }

    /// Resolve the address list: custom endpoints if any, else the network
    /// preset, minus disabled addresses.
    pub fn to_settings(&self) -> Result<RpcSettings> {
        let mut settings = if self.endpoints.is_empty() {
            RpcSettings::for_network(self.network)
        } else {
            RpcSettings::from_list(self.endpoints.iter().cloned())
        };

        let enabled: Vec<String> = settings
            .rpc_list()
            .iter()
            .filter(|url| !self.is_endpoint_disabled(url))
            .cloned()
            .collect();

        if enabled.is_empty() {
            return Err(ConfigError::NoEndpoints.into());
        }

        settings.setup(enabled);
        Ok(settings)
    }
}
