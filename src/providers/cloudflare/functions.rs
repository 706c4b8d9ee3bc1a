// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{header, Client};
use tracing::error;

// Current module imports
use super::constants::{AUTH_EMAIL_HEADER, AUTH_KEY_HEADER, REQUEST_TIMEOUT_SECS};
use super::errors::CloudflareError;
use super::types::{CfConfig, CfCredentials};

/// Creates a reqwest client with the appropriate headers for the
/// Cloudflare API. The credential scheme is fixed here, once, from
/// configuration.
pub(super) fn create_reqwest_client(config: &CfConfig) -> Result<Client, CloudflareError> {
    let mut headers: HeaderMap = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    // Mark security-sensitive headers with `set_sensitive`.
    match config.credentials()? {
        CfCredentials::Token(token) => {
            let bearer_token: String = format!("Bearer {}", token);
            let mut auth_value: HeaderValue =
                HeaderValue::from_str(&bearer_token).map_err(|e| {
                    error!(domain = %config.domain, "Invalid API token format: {}", e);
                    CloudflareError::InvalidHeaderValue(e)
                })?;
            auth_value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, auth_value);
        }
        CfCredentials::KeyPair { api_key, email } => {
            let mut key_value: HeaderValue = HeaderValue::from_str(&api_key).map_err(|e| {
                error!(domain = %config.domain, "Invalid API key format: {}", e);
                CloudflareError::InvalidHeaderValue(e)
            })?;
            key_value.set_sensitive(true);
            headers.insert(HeaderName::from_static(AUTH_KEY_HEADER), key_value);

            let email_value: HeaderValue = HeaderValue::from_str(&email).map_err(|e| {
                error!(domain = %config.domain, "Invalid auth email format: {}", e);
                CloudflareError::InvalidHeaderValue(e)
            })?;
            headers.insert(HeaderName::from_static(AUTH_EMAIL_HEADER), email_value);
        }
    }

    let client: Client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| {
            error!(domain = %config.domain, "Failed to build HTTP client: {}", e);
            CloudflareError::HttpClientBuild(e)
        })?;

    Ok(client)
}

/// Endpoint of the managed record under `api_base`.
pub(super) fn record_url(api_base: &str, config: &CfConfig) -> String {
    format!(
        "{}/zones/{}/dns_records/{}",
        api_base, config.zone_id, config.record_id
    )
}
