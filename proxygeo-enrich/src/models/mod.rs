//! Data models for proxygeo-enrich

pub mod summary;

pub use summary::{EnrichmentSummary, RecordOutcome, RecordTally};
