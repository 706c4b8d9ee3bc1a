// Standard library
use std::net::Ipv4Addr;

// 3rd party crates
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, error, warn};

// Project imports
use crate::providers::traits::DnsProvider;

// Current module imports
use super::constants::CLOUDFLARE_API_BASE;
use super::errors::{CloudflareError, CloudflareValidationError};
use super::functions::{create_reqwest_client, record_url};
use super::models::{RecordResponse, UpdateForm, UpdateResponse};
use super::types::{CfConfig, CfCredentials, Cloudflare};

impl CfConfig {
    /// Resolves the credential scheme. Exactly one variant must be
    /// configured.
    pub fn credentials(&self) -> Result<CfCredentials, CloudflareValidationError> {
        match (&self.api_token, &self.api_key, &self.email) {
            (Some(token), None, None) => Ok(CfCredentials::Token(token.clone())),
            (None, Some(api_key), Some(email)) => Ok(CfCredentials::KeyPair {
                api_key: api_key.clone(),
                email: email.clone(),
            }),
            (None, None, None) => Err(CloudflareValidationError::MissingCredentials),
            (Some(_), _, _) => Err(CloudflareValidationError::AmbiguousCredentials),
            _ => Err(CloudflareValidationError::IncompleteKeyPair),
        }
    }

    pub fn validate(&self) -> Result<(), CloudflareValidationError> {
        if self.zone_id.is_empty() {
            return Err(CloudflareValidationError::EmptyZoneId);
        }
        if self.record_id.is_empty() {
            return Err(CloudflareValidationError::EmptyRecordId);
        }
        if self.domain.is_empty() {
            return Err(CloudflareValidationError::EmptyDomain);
        }
        self.credentials()?;
        Ok(())
    }
}

impl Cloudflare {
    pub fn new(config: CfConfig) -> Result<Self, CloudflareError> {
        Self::with_api_base(config, CLOUDFLARE_API_BASE)
    }

    /// Builds a client against a non-default API base URL.
    pub fn with_api_base(config: CfConfig, api_base: &str) -> Result<Self, CloudflareError> {
        config.validate()?;
        let client = create_reqwest_client(&config)?;
        Ok(Self {
            config,
            client,
            api_base: api_base.to_string(),
        })
    }

    /// Fetches the current content of the managed record.
    async fn fetch_record(&self) -> Result<String, CloudflareError> {
        let url: String = record_url(&self.api_base, &self.config);
        debug!(domain = %self.config.domain, url = %url, "Sending DNS record request");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| CloudflareError::FetchFailed {
                    domain: self.config.domain.clone(),
                    message: format!("Failed to send fetch request: {}", e),
                })?;

        let status: StatusCode = response.status();
        if status != StatusCode::OK {
            return Err(CloudflareError::FetchFailed {
                domain: self.config.domain.clone(),
                message: format!("HTTP {}", status),
            });
        }

        let body: String = response
            .text()
            .await
            .map_err(|e| CloudflareError::FetchFailed {
                domain: self.config.domain.clone(),
                message: format!("Failed to read response body: {}", e),
            })?;

        let record: RecordResponse =
            serde_json::from_str(&body).map_err(|e| CloudflareError::FetchFailed {
                domain: self.config.domain.clone(),
                message: format!("Failed to parse response: {} - Raw: {}", e, body),
            })?;

        Ok(record.result.content)
    }

    /// Overwrites the managed record with `ip`.
    ///
    /// Only HTTP 200/201 proceed to body inspection; the parsed body's
    /// `success` boolean is the authoritative result.
    async fn update_record(&self, ip: &Ipv4Addr) -> Result<bool, CloudflareError> {
        let url: String = record_url(&self.api_base, &self.config);
        let form: UpdateForm = UpdateForm::new(&self.config, ip);

        let response = self
            .client
            .put(&url)
            .json(&form)
            .send()
            .await
            .map_err(|e| CloudflareError::UpdateFailed {
                domain: self.config.domain.clone(),
                message: format!("Failed to send update request: {}", e),
            })?;

        let status: StatusCode = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(CloudflareError::UpdateFailed {
                domain: self.config.domain.clone(),
                message: format!("HTTP {}", status),
            });
        }

        let body: String = response
            .text()
            .await
            .map_err(|e| CloudflareError::UpdateFailed {
                domain: self.config.domain.clone(),
                message: format!("Failed to read response body: {}", e),
            })?;

        let result: UpdateResponse =
            serde_json::from_str(&body).map_err(|e| CloudflareError::UpdateFailed {
                domain: self.config.domain.clone(),
                message: format!("Failed to parse response: {} - Raw: {}", e, body),
            })?;

        Ok(result.success)
    }
}

#[async_trait]
impl DnsProvider for Cloudflare {
    async fn read(&self) -> String {
        match self.fetch_record().await {
            Ok(content) => content,
            Err(e) => {
                warn!(domain = %self.config.domain, "get dns record failed: {}", e);
                String::new()
            }
        }
    }

    async fn write(&self, ip: &Ipv4Addr) -> bool {
        match self.update_record(ip).await {
            Ok(success) => {
                if !success {
                    warn!(
                        domain = %self.config.domain,
                        "update request accepted but not confirmed by provider"
                    );
                }
                success
            }
            Err(e) => {
                error!(domain = %self.config.domain, "update dns record failed: {}", e);
                false
            }
        }
    }
}
