//! Configuration: network presets, endpoint settings and the config file

mod file;
mod network;
mod settings;

pub use file::ConfigFile;
pub use network::Network;
pub use settings::RpcSettings;
