// 3rd party crates
use thiserror::Error;

/// Custom error type for Cloudflare operations.
#[derive(Debug, Error)]
pub enum CloudflareError {
    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid API credentials for '{0}'")]
    InvalidCredentials(String),

    #[error("Failed to fetch DNS record for '{domain}': {message}")]
    FetchFailed { domain: String, message: String },

    #[error("Failed to update DNS record for '{domain}': {message}")]
    UpdateFailed { domain: String, message: String },

    #[error(transparent)]
    Validation(#[from] CloudflareValidationError),
}

#[derive(Debug, Error)]
pub enum CloudflareValidationError {
    #[error("zone_id must not be empty")]
    EmptyZoneId,

    #[error("record_id must not be empty")]
    EmptyRecordId,

    #[error("domain must not be empty")]
    EmptyDomain,

    #[error("No credentials configured: set api_token, or api_key and email")]
    MissingCredentials,

    #[error("Both api_token and api_key/email are set; configure one scheme")]
    AmbiguousCredentials,

    #[error("api_key and email must be configured together")]
    IncompleteKeyPair,
}
