//! JSON collection loading and atomic writing

use crate::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Load a proxy collection (a top-level JSON array) from disk.
///
/// # Errors
/// - [`Error::NotFound`] if the file does not exist
/// - [`Error::Parse`] if the content is not valid JSON
/// - [`Error::InvalidInput`] if the document is not an array
pub fn load_collection(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    let document: Value = serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match document {
        Value::Array(records) => {
            debug!(path = %path.display(), records = records.len(), "Loaded proxy collection");
            Ok(records)
        }
        other => Err(Error::InvalidInput(format!(
            "expected a JSON array of proxy records, found {}",
            json_kind(&other)
        ))),
    }
}

/// Write a collection as 2-space indented JSON.
///
/// Content goes to a `.tmp` sibling first and is renamed over `path`, so
/// the destination is either the previous file or the complete new one.
pub fn write_collection(path: impl AsRef<Path>, records: &[Value]) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(records).map_err(Error::Serialize)?;
    let temp_path = temp_path_for(path);

    let result = write_then_rename(&temp_path, path, content.as_bytes());
    if result.is_err() && temp_path.exists() {
        if let Err(e) = fs::remove_file(&temp_path) {
            warn!(path = %temp_path.display(), "Failed to remove temp file: {}", e);
        }
    }
    result
}

fn write_then_rename(temp_path: &Path, path: &Path, content: &[u8]) -> Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(content)?;
    file.sync_all()?;
    drop(file);

    fs::rename(temp_path, path)?;
    debug!(path = %path.display(), bytes = content.len(), "Wrote collection");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
