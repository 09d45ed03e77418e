use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

/// Wire format of message timestamps: microsecond precision, always UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Parses a UUID from its canonical textual form
///
/// Accepts 32 hex digits, either bare or hyphenated in the 8-4-4-4-12 grouping, in any
/// letter case. Braced and URN forms are rejected.
///
/// # Arguments
/// - `raw` - The string to validate
///
/// # Returns
/// - `Some(Uuid)` - `raw` is a canonical UUID
/// - `None` - `raw` is anything else
pub fn validate_uuid(raw: &str) -> Option<Uuid> {
    match raw.len() {
        32 | 36 => Uuid::try_parse(raw).ok(),
        _ => None,
    }
}

/// Parses a wire timestamp such as `2018-11-16T23:30:57.000000Z`
///
/// The fractional part is mandatory and may carry one to six digits.
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Successfully parsed timestamp
/// - `None` - `raw` does not follow the wire format
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let (_, fraction) = raw.strip_suffix('Z')?.rsplit_once('.')?;
    if fraction.is_empty() || fraction.len() > 6 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.fZ")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Renders a timestamp in the wire format
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
