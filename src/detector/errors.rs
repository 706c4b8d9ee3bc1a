// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Network error from {service}: {error}")]
    Network {
        service: String,
        error: reqwest::Error,
    },

    #[error("Unexpected status {status} from {service}")]
    BadStatus {
        service: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid response from {service}: {response}")]
    InvalidResponse { service: String, response: String },

    #[error("Failed to run address command: {0}")]
    Command(#[from] std::io::Error),

    #[error("Address command failed ({status}): {stderr}")]
    CommandFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Could not parse '{0}' as an IPv4 address")]
    InvalidAddress(String),
}

/// Requested detector name is not one of the supported strategies.
#[derive(Debug, Error)]
#[error("Unknown detector '{0}'. Must be one of: ipify, ip-cmd")]
pub struct UnknownDetector(pub String);
