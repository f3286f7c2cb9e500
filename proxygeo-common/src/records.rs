//! Proxy record helpers
//!
//! Records are kept as raw `serde_json::Value` objects so that every field
//! the input carries survives enrichment untouched. Only `country`, `city`
//! and `isp` are ever written.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field holding the address looked up for a record
pub const HOST_FIELD: &str = "host";

/// Fields written by enrichment, in output order
pub const LOCATION_FIELDS: [&str; 3] = ["country", "city", "isp"];

/// Geographic and ISP data for a single host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
}

/// Returns the record's host when it is a non-empty string.
///
/// Non-object records, a missing `host`, `null`, non-string values and
/// blank strings all yield `None`; such records are passed through as-is.
pub fn record_host(record: &Value) -> Option<&str> {
    record
        .as_object()?
        .get(HOST_FIELD)?
        .as_str()
        .filter(|host| !host.trim().is_empty())
}

/// Overwrites the record's location fields with `location`.
///
/// Missing values are written as JSON `null`. Returns `false` (and leaves
/// the value untouched) when the record is not a JSON object.
pub fn apply_location(record: &mut Value, location: &Location) -> bool {
    let Some(object) = record.as_object_mut() else {
        return false;
    };

    let values = [&location.country, &location.city, &location.isp];
    for (field, value) in LOCATION_FIELDS.iter().zip(values) {
        let json = value.clone().map(Value::String).unwrap_or(Value::Null);
        object.insert((*field).to_string(), json);
    }
    true
}
