//! Oslo City Bike HTTP client.
//!
//! Every request carries the `Client-Identifier` header the API requires.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{AvailabilitySnapshot, Station, StatusReport};

use super::convert::{convert_availability, convert_stations, convert_status};
use super::error::UpstreamError;
use super::source::UpstreamSource;
use super::types::{AvailabilityResponse, StationsResponse, StatusEnvelope};

/// Default base URL for the bike-share API.
pub const DEFAULT_BASE_URL: &str = "https://oslobysykkel.no/api/v1";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the bike-share API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BikeClientConfig {
    /// Value of the `Client-Identifier` header
    pub client_identifier: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BikeClientConfig {
    /// Create a new config with the given client identifier.
    pub fn new(client_identifier: impl Into<String>) -> Self {
        Self {
            client_identifier: client_identifier.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the bike-share API.
#[derive(Debug, Clone)]
pub struct BikeClient {
    http: reqwest::Client,
    base_url: String,
}

impl BikeClient {
    /// Create a new client.
    ///
    /// Fails if the client identifier is empty or not a valid header value.
    pub fn new(config: BikeClientConfig) -> Result<Self, UpstreamError> {
        if config.client_identifier.is_empty() {
            return Err(UpstreamError::NotConfigured(
                "client identifier is required".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        let identifier = HeaderValue::from_str(&config.client_identifier).map_err(|_| {
            UpstreamError::NotConfigured("invalid client identifier format".to_string())
        })?;
        headers.insert(HeaderName::from_static("client-identifier"), identifier);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch and decode a JSON document from `{base_url}/{endpoint}`.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, UpstreamError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "fetching upstream resource");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(UpstreamError::Unauthorized);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| UpstreamError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl UpstreamSource for BikeClient {
    async fn fetch_stations(&self) -> Result<Vec<Station>, UpstreamError> {
        let response: StationsResponse = self.get_json("stations").await?;
        Ok(convert_stations(response))
    }

    async fn fetch_availability(&self) -> Result<AvailabilitySnapshot, UpstreamError> {
        let response: AvailabilityResponse = self.get_json("stations/availability").await?;
        Ok(convert_availability(response))
    }

    async fn fetch_status(&self) -> Result<StatusReport, UpstreamError> {
        let envelope: StatusEnvelope = self.get_json("status").await?;
        Ok(convert_status(envelope.status))
    }
}
