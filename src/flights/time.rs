//! Timestamp parsing and delay detection.
//!
//! The feed publishes local airport time without an offset
//! (`2024-01-01T10:00:00`); offset-qualified RFC 3339 values are accepted as
//! well. Naive values are read as UTC. Every comparison made by the service
//! is between two values from the same feed, so ordering and differences are
//! unaffected.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// A flight counts as delayed once it leaves this many minutes late.
pub const DELAY_THRESHOLD_MINUTES: i64 = 10;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a feed timestamp. Returns `None` for anything unrecognised.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// True when `actual` is at least [`DELAY_THRESHOLD_MINUTES`] after `scheduled`.
///
/// Early or on-time flights are never delayed. An unparseable timestamp on
/// either side is treated as on time.
pub fn is_delayed(scheduled: &str, actual: &str) -> bool {
    let (Some(scheduled), Some(actual)) = (parse_timestamp(scheduled), parse_timestamp(actual))
    else {
        return false;
    };

    actual > scheduled && actual - scheduled >= TimeDelta::minutes(DELAY_THRESHOLD_MINUTES)
}
