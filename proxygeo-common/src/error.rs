//! Common error types for proxygeo

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for proxygeo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Input/output errors shared across proxygeo crates
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Input file is not valid JSON
    #[error("Error reading JSON from '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input is valid JSON but not a proxy collection
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Collection could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
