//! proxygeo-enrich library interface
//!
//! Enriches a JSON list of proxy records with country, city and ISP data
//! from the ip-api.com geolocation service. Exposed as a library so the
//! driver can be exercised with injected lookups and sleepers.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod workflow;

pub use crate::config::EnrichConfig;
pub use crate::error::{EnrichError, EnrichResult, LookupError};
pub use crate::models::{EnrichmentSummary, RecordOutcome, RecordTally};
pub use crate::services::{GeoLookup, GeoResponse, IpApiClient, PauseSchedule, Sleeper, TokioSleeper};
pub use crate::workflow::Enricher;
