// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::providers::cloudflare::types::CfConfig;

// Current module imports
use super::constants::{
    default_detector_interface, default_detector_kind, default_log_level,
    default_update_interval,
};

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Update {
    /// Reconcile interval in seconds.
    #[serde(default = "default_update_interval")]
    pub interval: u64,
}

/// Address-detector selection. `kind` is one of "ipify" or "ip-cmd";
/// `interface` is only consulted by the ip-cmd strategy.
#[derive(Debug, Deserialize, Clone)]
pub struct DetectorSettings {
    #[serde(default = "default_detector_kind")]
    pub kind: String,
    #[serde(default = "default_detector_interface")]
    pub interface: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub update: Update,
    #[serde(default)]
    pub detector: DetectorSettings,
    pub cloudflare: CfConfig,
}

/// Loads the application settings once at startup.
pub struct ConfigManager {
    pub settings: Settings,
    pub config_path: PathBuf,
}
