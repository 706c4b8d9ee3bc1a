// Standard library
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::process::Command;
use tracing::debug;

// Current module imports
use super::constants::{IPIFY_URL, IP_CMD_SHELL, REQUEST_TIMEOUT_SECS};
use super::errors::{DetectorError, UnknownDetector};
use super::traits::Detector;
use super::types::{DetectorKind, IpCmdDetector, IpifyDetector, IpifyResponse};

impl FromStr for DetectorKind {
    type Err = UnknownDetector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ipify" => Ok(DetectorKind::Ipify),
            "ip-cmd" => Ok(DetectorKind::IpCmd),
            other => Err(UnknownDetector(other.to_string())),
        }
    }
}

impl DetectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorKind::Ipify => "ipify",
            DetectorKind::IpCmd => "ip-cmd",
        }
    }

    /// Builds the detector selected by this kind. `interface` is only
    /// consulted by the ip-cmd strategy.
    pub fn build(&self, interface: &str) -> Result<Box<dyn Detector>, DetectorError> {
        match self {
            DetectorKind::Ipify => Ok(Box::new(IpifyDetector::new()?)),
            DetectorKind::IpCmd => Ok(Box::new(IpCmdDetector::new(interface))),
        }
    }
}

impl IpifyDetector {
    pub fn new() -> Result<Self, DetectorError> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Detector for IpifyDetector {
    async fn determine(&self) -> Result<Option<Ipv4Addr>, DetectorError> {
        let response = self
            .client
            .get(IPIFY_URL)
            .send()
            .await
            .map_err(|e| DetectorError::Network {
                service: IPIFY_URL.to_string(),
                error: e,
            })?;

        let status: StatusCode = response.status();
        if status != StatusCode::OK {
            return Err(DetectorError::BadStatus {
                service: IPIFY_URL.to_string(),
                status,
            });
        }

        let body: String = response.text().await.map_err(|e| DetectorError::Network {
            service: IPIFY_URL.to_string(),
            error: e,
        })?;

        let address: IpifyResponse =
            serde_json::from_str(&body).map_err(|_| DetectorError::InvalidResponse {
                service: IPIFY_URL.to_string(),
                response: body.clone(),
            })?;

        parse_address_token(&address.ip)
    }
}

impl IpCmdDetector {
    pub fn new(interface: &str) -> Self {
        Self {
            interface: interface.to_string(),
        }
    }

    fn script(&self) -> String {
        format!(
            "ip addr show {} | awk 'NR==3 {{print $2}}'",
            self.interface
        )
    }
}

#[async_trait]
impl Detector for IpCmdDetector {
    async fn determine(&self) -> Result<Option<Ipv4Addr>, DetectorError> {
        let script: String = self.script();
        debug!(interface = %self.interface, "running address command");

        let output = Command::new(IP_CMD_SHELL)
            .arg("-c")
            .arg(&script)
            .output()
            .await?;

        if !output.status.success() {
            return Err(DetectorError::CommandFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_address_token(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parses one address token as produced by either strategy.
///
/// Trailing terminators are stripped, as is any `/prefix` suffix the
/// `ip` command appends on broadcast interfaces. An empty token means
/// "address unknown this cycle".
pub(super) fn parse_address_token(raw: &str) -> Result<Option<Ipv4Addr>, DetectorError> {
    let token: &str = raw.trim();
    if token.is_empty() {
        return Ok(None);
    }

    let address: &str = token.split('/').next().unwrap_or(token);
    let ip: Ipv4Addr = address
        .parse()
        .map_err(|_| DetectorError::InvalidAddress(token.to_string()))?;

    Ok(Some(ip))
}
