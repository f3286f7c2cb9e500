//! Command-line arguments
//!
//! Every knob can also be set through a `PROXYGEO_*` environment variable;
//! command-line values win.

use crate::config::{EnrichConfig, DEFAULT_ENDPOINT};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments for proxygeo-enrich
#[derive(Parser, Debug)]
#[command(name = "proxygeo-enrich")]
#[command(about = "Enrich a proxy list JSON file with country, city and ISP data")]
#[command(version)]
pub struct CliArgs {
    /// Path to the proxy list JSON file
    pub path: Option<PathBuf>,

    /// Geolocation endpoint base URL (host is appended as a path segment)
    #[arg(long, default_value = DEFAULT_ENDPOINT, env = "PROXYGEO_ENDPOINT")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, env = "PROXYGEO_TIMEOUT_SECS")]
    pub timeout_secs: u64,

    /// Records per rate-limit window
    #[arg(long, default_value_t = 40, env = "PROXYGEO_BATCH_SIZE")]
    pub batch_size: usize,

    /// Pause length in seconds at each window boundary
    #[arg(long, default_value_t = 60, env = "PROXYGEO_PAUSE_SECS")]
    pub pause_secs: u64,
}

impl CliArgs {
    pub fn to_config(&self) -> EnrichConfig {
        EnrichConfig {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            batch_size: self.batch_size,
            pause: Duration::from_secs(self.pause_secs),
        }
    }
}

/// Text shown when no input path is given
pub fn usage() -> String {
    [
        "Usage: proxygeo-enrich <path_to_proxies.json>",
        "Example: proxygeo-enrich storage/datasets/default.json",
    ]
    .join("\n")
}
