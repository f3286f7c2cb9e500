//! proxygeo-enrich - Proxy list geolocation enrichment
//!
//! Reads a JSON array of proxy records, looks up each `host` on ip-api.com
//! and writes `<input>_enriched.json` with `country`, `city` and `isp` added.
//!
//! Exit status: 0 on success or when printing usage, 1 when the input
//! cannot be loaded or the output cannot be written.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use proxygeo_enrich::cli::{usage, CliArgs};
use proxygeo_enrich::Enricher;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "proxygeo_enrich=info,proxygeo_common=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args = CliArgs::parse();

    debug!(
        "proxygeo-enrich {} (git {}, {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_PROFILE")
    );

    let Some(path) = args.path.as_ref() else {
        println!("{}", usage());
        return Ok(ExitCode::SUCCESS);
    };

    let config = args.to_config();
    let enricher = Enricher::from_config(&config).context("Failed to initialize enricher")?;

    match enricher.run(path).await {
        Ok(summary) => {
            println!("\nDone! Enriched {} proxies.", summary.enriched());
            println!("Results saved to: {}", summary.output_path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
