//! Error types for proxygeo-enrich
//!
//! Two severities:
//! - [`LookupError`] is per record; the driver logs it and moves on.
//! - [`EnrichError`] stops the run (bad input, failed write, bad settings).

use std::path::PathBuf;
use thiserror::Error;

/// Per-record geolocation lookup failure
#[derive(Debug, Error)]
pub enum LookupError {
    /// Request could not be sent or the connection failed/timed out
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    Http(u16),

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Service answered but could not geolocate the host
    #[error("Could not resolve {host} (status: {status})")]
    ResolutionFailed { host: String, status: String },
}

/// Run-level failure
#[derive(Debug, Error)]
pub enum EnrichError {
    /// Input collection could not be loaded
    #[error(transparent)]
    Input(proxygeo_common::Error),

    /// Enriched collection could not be saved
    #[error("Error saving results to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: proxygeo_common::Error,
    },

    /// Invalid runtime settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Result type for run-level operations
pub type EnrichResult<T> = Result<T, EnrichError>;
