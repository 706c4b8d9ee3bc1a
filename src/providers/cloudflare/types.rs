// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

/// Client for one managed record behind the Cloudflare API.
#[derive(Debug, Clone)]
pub struct Cloudflare {
    pub config: CfConfig,
    pub client: Client,
    pub api_base: String,
}

/// Configuration for Cloudflare API interactions. Exactly one
/// credential variant must be set: `api_token`, or the `api_key` +
/// `email` pair.
#[derive(Debug, Deserialize, Clone)]
pub struct CfConfig {
    pub zone_id: String,
    pub record_id: String,
    pub domain: String,

    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Resolved authentication scheme, fixed at startup.
#[derive(Debug, Clone)]
pub enum CfCredentials {
    /// `Authorization: Bearer <token>`
    Token(String),
    /// `X-Auth-Key` / `X-Auth-Email` header pair.
    KeyPair { api_key: String, email: String },
}
