// Standard library
use std::net::Ipv4Addr;

// 3rd party crates
use async_trait::async_trait;

/// Operations the reconciler needs from a DNS provider: read the
/// managed record, overwrite it.
///
/// Failures stay inside the implementation: they are logged there and
/// surface only as an empty read or a `false` write. The reconciler
/// treats both as "this cycle contributes no actionable information".
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Current content of the managed record. Empty on any failure.
    async fn read(&self) -> String;

    /// Overwrites the record with `ip`. True only when the provider
    /// confirms the update.
    async fn write(&self, ip: &Ipv4Addr) -> bool;
}
