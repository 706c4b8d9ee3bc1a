// Standard library
use std::net::Ipv4Addr;

// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::DetectorError;

/// Strategy for learning the caller's current public IPv4 address.
///
/// `Ok(None)` signals "address unknown this cycle": not an error, but
/// carries no information and must not be propagated to the DNS
/// provider.
#[async_trait]
pub trait Detector: Send + Sync {
    async fn determine(&self) -> Result<Option<Ipv4Addr>, DetectorError>;
}
