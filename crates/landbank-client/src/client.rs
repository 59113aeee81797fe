//! HTTP client for the LandBank REST API.
//!
//! Wraps `reqwest` with LandBank-specific envelope handling. The API reports
//! logical failures through `requestSuccessful` (often alongside a non-2xx
//! status), so the envelope is parsed whatever the HTTP status; only bodies
//! that are not an envelope become transport-level errors.

use std::time::Duration;

use landbank_core::{normalize_payload, AppConfig};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ClientError;
use crate::types::{AdsQuery, LandbankResponse};

const ADS_PATH: &str = "Ads";

/// Client for the LandBank REST API.
///
/// Use [`LandbankClient::from_config`] in binaries or
/// [`LandbankClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct LandbankClient {
    client: Client,
    ads_url: Url,
}

impl LandbankClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ClientError::InvalidBaseUrl`] if the configured URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ClientError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so joining keeps the `/api` segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };
        let ads_url = Url::parse(&normalised)
            .and_then(|base| base.join(ADS_PATH))
            .map_err(|e| invalid(e.to_string()))?;
        if ads_url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_owned()));
        }

        Ok(Self { client, ads_url })
    }

    /// Queries the ads endpoint and returns the raw envelope.
    ///
    /// A `requestSuccessful: false` envelope is returned as `Ok`; callers
    /// decide how to present it.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] for a non-2xx response without an envelope.
    /// - [`ClientError::Deserialize`] for a 2xx response without an envelope.
    pub async fn list_ads(&self, query: &AdsQuery) -> Result<LandbankResponse<Value>, ClientError> {
        let url = self.build_url(query);
        self.request_envelope(&url).await
    }

    /// Queries the ads endpoint and returns the raw ad records.
    ///
    /// # Errors
    ///
    /// Same as [`LandbankClient::list_ads`], plus [`ClientError::Api`] when the
    /// API reports failure.
    pub async fn fetch_records(&self, query: &AdsQuery) -> Result<Vec<Value>, ClientError> {
        let envelope = self.list_ads(query).await?;
        if let Some(message) = envelope.failure_message() {
            return Err(ClientError::Api(message));
        }
        let records = normalize_payload(envelope.response_data.as_ref()).to_vec();
        tracing::debug!(count = records.len(), "fetched ad records");
        Ok(records)
    }

    /// Fetches the raw record for one ad, or `None` if the API has no such ad.
    ///
    /// # Errors
    ///
    /// Same as [`LandbankClient::fetch_records`].
    pub async fn get_ad(&self, ad_id: &str) -> Result<Option<Value>, ClientError> {
        let records = self.fetch_records(&AdsQuery::for_ad(ad_id)).await?;
        Ok(records.into_iter().next())
    }

    /// Builds the ads URL with percent-encoded query parameters.
    fn build_url(&self, query: &AdsQuery) -> Url {
        let mut url = self.ads_url.clone();
        url.query_pairs_mut().extend_pairs(query.pairs());
        url
    }

    async fn request_envelope(&self, url: &Url) -> Result<LandbankResponse<Value>, ClientError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<LandbankResponse<Value>>(&body) {
            Ok(envelope) => {
                if !status.is_success() {
                    tracing::warn!(
                        status = status.as_u16(),
                        message = envelope.message.as_deref().unwrap_or_default(),
                        "LandBank API returned an error status"
                    );
                }
                Ok(envelope)
            }
            Err(source) if status.is_success() => Err(ClientError::Deserialize {
                context: url.path().to_owned(),
                source,
            }),
            Err(_) => Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
