// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

/// Detector strategy selector, parsed from configuration or the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorKind {
    /// Query the api.ipify.org echo service.
    Ipify,
    /// Inspect a local network interface via the `ip` command.
    IpCmd,
}

/// Remote-query strategy backed by api.ipify.org.
#[derive(Debug, Clone)]
pub struct IpifyDetector {
    pub client: Client,
}

/// Local-interface strategy shelling out to `ip addr show`.
#[derive(Debug, Clone)]
pub struct IpCmdDetector {
    pub interface: String,
}

/// Body returned by the ipify echo service.
#[derive(Debug, Deserialize)]
pub struct IpifyResponse {
    pub ip: String,
}
