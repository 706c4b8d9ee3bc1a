// 3rd party crates
use thiserror::Error;

// Project imports
use crate::detector::errors::UnknownDetector;
use crate::providers::cloudflare::errors::CloudflareValidationError;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not determine the configuration directory")]
    NoConfigDir,

    #[error("Configuration file path contains invalid UTF-8 characters")]
    InvalidPath,

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),

    #[error("Update interval must be greater than 0, got {0}")]
    InvalidUpdateInterval(u64),

    #[error("Detector configuration error: {0}")]
    Detector(#[from] UnknownDetector),

    #[error("Cloudflare configuration error: {0}")]
    CloudflareConfig(#[from] CloudflareValidationError),
}
