//! Cloudflare DNS Record Client
//!
//! Reads and overwrites a single pre-existing A record through the
//! Cloudflare v4 API (`/zones/{zone_id}/dns_records/{record_id}`).
//! Authentication is a configuration-time choice: either an API token
//! (Bearer scheme) or the legacy API-key/email header pair.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod models;
pub mod types;
