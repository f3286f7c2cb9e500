//! Enrichment driver
//!
//! Loads a proxy collection, geolocates each record's host one at a time,
//! merges the results in place and writes the enriched copy next to the
//! input.
//!
//! **Per-record flow:**
//! 1. Skip records without a usable `host`
//! 2. Pause if the record index hits the rate-limit schedule
//! 3. Look the host up (single attempt)
//! 4. Merge `country`/`city`/`isp` on success, log and continue otherwise

use crate::config::EnrichConfig;
use crate::error::{EnrichError, EnrichResult, LookupError};
use crate::models::{EnrichmentSummary, RecordOutcome, RecordTally};
use crate::services::{GeoLookup, IpApiClient, PauseSchedule, Sleeper, TokioSleeper};
use proxygeo_common::{apply_location, enriched_output_path, load_collection, record_host, write_collection};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Sequential, rate-limited enrichment driver
pub struct Enricher<L, S = TokioSleeper> {
    lookup: L,
    sleeper: S,
    schedule: PauseSchedule,
}

impl Enricher<IpApiClient, TokioSleeper> {
    /// Production driver: ip-api.com client and tokio sleeps
    pub fn from_config(config: &EnrichConfig) -> EnrichResult<Self> {
        config.validate()?;
        let client = IpApiClient::new(config)?;
        Ok(Self::new(
            client,
            TokioSleeper,
            PauseSchedule::new(config.batch_size, config.pause),
        ))
    }
}

impl<L, S> Enricher<L, S>
where
    L: GeoLookup + Sync,
    S: Sleeper + Sync,
{
    pub fn new(lookup: L, sleeper: S, schedule: PauseSchedule) -> Self {
        Self {
            lookup,
            sleeper,
            schedule,
        }
    }

    pub fn schedule(&self) -> PauseSchedule {
        self.schedule
    }

    /// Enrich the collection at `path` and write it to the derived output path.
    ///
    /// Per-record failures never abort the run; they are logged and counted
    /// in the returned summary.
    ///
    /// # Errors
    /// - [`EnrichError::Input`] if the file is missing, not JSON, or not an array
    /// - [`EnrichError::Write`] if the output file cannot be written
    pub async fn run(&self, path: impl AsRef<Path>) -> EnrichResult<EnrichmentSummary> {
        let path = path.as_ref();
        let mut records = load_collection(path).map_err(EnrichError::Input)?;

        let tally = self.enrich_records(&mut records).await;

        let output_path = enriched_output_path(path);
        write_collection(&output_path, &records).map_err(|source| EnrichError::Write {
            path: output_path.clone(),
            source,
        })?;

        debug!(
            input = %path.display(),
            output = %output_path.display(),
            enriched = tally.enriched,
            total = tally.total,
            "Enrichment run complete"
        );

        Ok(EnrichmentSummary { tally, output_path })
    }

    /// Enrich records in place, returning per-outcome counts.
    ///
    /// Order and length of `records` are never changed.
    pub async fn enrich_records(&self, records: &mut [Value]) -> RecordTally {
        let total = records.len();
        let mut tally = RecordTally::default();

        info!("Starting enrichment for {} proxies...", total);

        for (index, record) in records.iter_mut().enumerate() {
            let Some(host) = record_host(record).map(str::to_owned) else {
                tally.record(RecordOutcome::Skipped);
                continue;
            };

            if self.schedule.should_pause(index) {
                info!(
                    "Reached rate limit threshold. Pausing for {} seconds...",
                    self.schedule.pause().as_secs_f64()
                );
                self.sleeper.sleep(self.schedule.pause()).await;
                tally.pauses += 1;
            }

            info!("[{}/{}] Fetching data for {}...", index + 1, total, host);
            let outcome = self.enrich_record(&host, record).await;
            tally.record(outcome);
        }

        tally
    }

    async fn enrich_record(&self, host: &str, record: &mut Value) -> RecordOutcome {
        match self.lookup.lookup(host).await {
            Ok(location) => {
                apply_location(record, &location);
                RecordOutcome::Enriched
            }
            Err(LookupError::ResolutionFailed { status, .. }) => {
                warn!("Could not resolve {}", host);
                debug!(host = %host, status = %status, "Non-success geolocation status");
                RecordOutcome::Unresolved
            }
            Err(e) => {
                error!("Error fetching {}: {}", host, e);
                RecordOutcome::Failed
            }
        }
    }
}
