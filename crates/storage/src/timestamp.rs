//! Minute-precision text encoding for event timestamps.
//!
//! Stored values sort lexicographically in chronological order, so the
//! overlap query compares them as plain strings.

use chrono::{Datelike, NaiveDateTime};

use crate::{Error, Result};

/// Storage format for event start/end values, e.g. `2024-07-04T09:30`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Years whose `%Y` rendering is exactly four digits. Outside this range
/// chrono writes a sign (`-0001`, `+10000`) and text order stops matching
/// time order.
pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

/// Whether `ts` can be stored without breaking the overlap comparison.
pub fn is_supported(ts: &NaiveDateTime) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&ts.year())
}

/// Encode a timestamp, dropping seconds and anything finer.
///
/// Only years 0000-9999 are accepted; anything else is
/// [`Error::YearOutOfRange`].
pub fn encode(ts: &NaiveDateTime) -> Result<String> {
    if !is_supported(ts) {
        return Err(Error::YearOutOfRange { year: ts.year() });
    }
    Ok(ts.format(TIMESTAMP_FORMAT).to_string())
}

/// Decode a stored timestamp.
pub fn decode(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| Error::Timestamp {
        value: value.to_string(),
        source,
    })
}
