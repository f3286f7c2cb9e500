//! Enrichment workflow

pub mod enrichment;

pub use enrichment::Enricher;
