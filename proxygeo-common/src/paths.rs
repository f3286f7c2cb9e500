//! Output path derivation

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

const INPUT_EXTENSION: &str = "json";
const OUTPUT_SUFFIX: &str = "_enriched.json";

/// Derive the enriched output path for an input collection.
///
/// A trailing `.json` is replaced by `_enriched.json`; any other path gets
/// `_enriched.json` appended, so the input file is never the destination.
///
/// ```
/// use proxygeo_common::enriched_output_path;
/// use std::path::PathBuf;
///
/// assert_eq!(
///     enriched_output_path("data/proxies.json"),
///     PathBuf::from("data/proxies_enriched.json")
/// );
/// ```
///
/// Works on the raw `OsStr`, so non-UTF-8 file names keep their bytes.
pub fn enriched_output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();

    let Some(file_name) = input.file_name() else {
        let mut raw = input.as_os_str().to_os_string();
        raw.push(OUTPUT_SUFFIX);
        return PathBuf::from(raw);
    };

    let stem = match (input.extension(), input.file_stem()) {
        (Some(ext), Some(stem)) if ext == OsStr::new(INPUT_EXTENSION) => stem,
        _ => file_name,
    };

    let mut name = stem.to_os_string();
    name.push(OUTPUT_SUFFIX);
    input.with_file_name(name)
}
