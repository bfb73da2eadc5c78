//! Best-effort wall-clock parsing.
//!
//! Upload time columns arrive in whatever shape the site's WMS exports:
//! RFC 3339, space-separated datetimes, bare dates, or raw epoch numbers.
//! Parsing tries each shape in turn and gives up quietly — callers apply
//! the documented fallback (row sequence index for sorting, string
//! comparison between two unparseable values) rather than erroring.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Datetime shapes tried after RFC 3339, most common first.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a raw time value to epoch milliseconds (UTC).
///
/// Naive datetimes (no offset) are interpreted as UTC.  A bare integer is
/// taken as epoch milliseconds — the shape synthetic sequence-index times
/// take.  Returns `None` for anything unrecognized.
pub fn parse_time_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
        }
    }

    raw.parse::<i64>().ok()
}
