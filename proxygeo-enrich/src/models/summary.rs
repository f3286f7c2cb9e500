//! Run summary models

use serde::Serialize;
use std::path::PathBuf;

/// What happened to a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOutcome {
    /// No usable host; record passed through untouched
    Skipped,
    /// Service resolved the host; location fields written
    Enriched,
    /// Service answered with a non-success status
    Unresolved,
    /// Transport, HTTP or parse failure
    Failed,
}

/// Counters accumulated over one pass of the record loop
///
/// `total == attempted + skipped` and
/// `attempted == enriched + unresolved + failed` always hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordTally {
    pub total: usize,
    pub attempted: usize,
    pub enriched: usize,
    pub unresolved: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Rate-limit pauses taken
    pub pauses: usize,
}

impl RecordTally {
    pub fn record(&mut self, outcome: RecordOutcome) {
        self.total += 1;
        match outcome {
            RecordOutcome::Skipped => self.skipped += 1,
            RecordOutcome::Enriched => {
                self.attempted += 1;
                self.enriched += 1;
            }
            RecordOutcome::Unresolved => {
                self.attempted += 1;
                self.unresolved += 1;
            }
            RecordOutcome::Failed => {
                self.attempted += 1;
                self.failed += 1;
            }
        }
    }
}

/// Result of a completed file-to-file run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichmentSummary {
    pub tally: RecordTally,
    pub output_path: PathBuf,
}

impl EnrichmentSummary {
    /// Number of records that received location data
    pub fn enriched(&self) -> usize {
        self.tally.enriched
    }
}
