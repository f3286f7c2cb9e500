//! Runtime settings for an enrichment run
//!
//! Defaults mirror the free ip-api.com tier: 45 requests/minute, used
//! conservatively as 40 requests per 60 second window.

use crate::error::{EnrichError, EnrichResult};
use std::time::Duration;

/// Default geolocation endpoint; the host is appended as a path segment
pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Records per rate-limit window
pub const DEFAULT_BATCH_SIZE: usize = 40;

/// Pause taken at each window boundary
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(60);

/// Settings for [`crate::Enricher`] and [`crate::IpApiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichConfig {
    /// Geolocation endpoint base URL
    pub endpoint: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Pause before every record index that is a non-zero multiple of this
    pub batch_size: usize,
    /// Length of each rate-limit pause
    pub pause: Duration,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            batch_size: DEFAULT_BATCH_SIZE,
            pause: DEFAULT_PAUSE,
        }
    }
}

impl EnrichConfig {
    /// Reject settings that would make the run meaningless or hang
    pub fn validate(&self) -> EnrichResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(EnrichError::Config("endpoint must not be empty".to_string()));
        }
        if self.batch_size == 0 {
            return Err(EnrichError::Config(
                "batch size must be greater than zero".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(EnrichError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Endpoint with any trailing slash removed
    pub fn endpoint_base(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}
