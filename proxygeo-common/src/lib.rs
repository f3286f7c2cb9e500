//! # proxygeo Common Library
//!
//! Shared code for the proxygeo tools including:
//! - Error types for input/output failures
//! - Proxy record helpers (host extraction, location merge)
//! - JSON collection loading and atomic writing
//! - Output path derivation

pub mod error;
pub mod json_io;
pub mod paths;
pub mod records;

pub use error::{Error, Result};
pub use json_io::{load_collection, write_collection};
pub use paths::enriched_output_path;
pub use records::{apply_location, record_host, Location};
