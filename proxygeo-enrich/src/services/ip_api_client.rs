//! ip-api.com geolocation client
//!
//! Resolves a proxy host to country, city and ISP.
//!
//! # API Reference
//! - Endpoint: http://ip-api.com/json/{host}?fields=status,country,city,isp
//! - Rate Limit: 45 requests/minute on the free tier (enforced by the caller,
//!   see [`crate::services::rate_limiter`])

use crate::config::EnrichConfig;
use crate::error::{EnrichError, EnrichResult, LookupError};
use async_trait::async_trait;
use proxygeo_common::Location;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

/// Fields requested from the service, in query order
pub const RESPONSE_FIELDS: &str = "status,country,city,isp";

/// Status value the service reports for a resolved host
pub const SUCCESS_STATUS: &str = "success";

/// Anything that can geolocate a host.
///
/// The driver only depends on this trait so tests can substitute canned
/// responses for the network.
#[async_trait]
pub trait GeoLookup {
    /// Resolve `host`, returning its location or the reason it failed
    async fn lookup(&self, host: &str) -> Result<Location, LookupError>;
}

/// Raw JSON response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeoResponse {
    pub status: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
}

impl GeoResponse {
    /// Whether the service resolved the host
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }

    /// Convert a successful response into a [`Location`]
    pub fn into_location(self, host: &str) -> Result<Location, LookupError> {
        if !self.is_success() {
            return Err(LookupError::ResolutionFailed {
                host: host.to_string(),
                status: self.status.unwrap_or_else(|| "missing".to_string()),
            });
        }

        Ok(Location {
            country: self.country,
            city: self.city,
            isp: self.isp,
        })
    }
}

/// HTTP client for the ip-api.com JSON endpoint
pub struct IpApiClient {
    http_client: Client,
    endpoint: Url,
}

impl IpApiClient {
    /// Build a client from run settings
    ///
    /// # Errors
    /// - [`EnrichError::Config`] if the endpoint is not a usable base URL
    /// - [`EnrichError::Client`] if the HTTP client cannot be built
    pub fn new(config: &EnrichConfig) -> EnrichResult<Self> {
        let endpoint = Url::parse(config.endpoint_base())
            .map_err(|e| EnrichError::Config(format!("invalid endpoint '{}': {}", config.endpoint, e)))?;
        if endpoint.cannot_be_a_base() {
            return Err(EnrichError::Config(format!(
                "endpoint '{}' cannot take a host path segment",
                config.endpoint
            )));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EnrichError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    /// URL queried for `host`: `<endpoint>/<host>?fields=status,country,city,isp`
    pub fn lookup_url(&self, host: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(host);
        }
        url.set_query(Some(&format!("fields={RESPONSE_FIELDS}")));
        url
    }

    /// Issue the GET request and decode the body without judging `status`
    pub async fn fetch(&self, host: &str) -> Result<GeoResponse, LookupError> {
        let url = self.lookup_url(host);
        debug!(host = %host, url = %url, "Querying geolocation service");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Http(status.as_u16()));
        }

        let body: GeoResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        debug!(
            host = %host,
            status = ?body.status,
            country = ?body.country,
            "Geolocation response received"
        );

        Ok(body)
    }
}

#[async_trait]
impl GeoLookup for IpApiClient {
    async fn lookup(&self, host: &str) -> Result<Location, LookupError> {
        self.fetch(host).await?.into_location(host)
    }
}
