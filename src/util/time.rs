//! Timestamp capture and rendering.
//!
//! Catalog timestamps are naive UTC values. They are captured at microsecond precision so a
//! value read back from Postgres compares equal to the one that was written, and rendered in
//! the ISO-8601 form used by the transport mappings.

use chrono::{NaiveDateTime, SubsecRound, Timelike, Utc};

/// Returns the current UTC time truncated to microseconds.
///
/// Used for `subscription_date` and `date_added`, which are captured once at insert time and
/// never modified afterwards.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}

/// Renders a timestamp as ISO-8601 without an offset.
///
/// The fractional part is only emitted when microseconds are non-zero, in which case exactly
/// six digits are written.
///
/// # Example
/// ```ignore
/// // 2024-01-15 10:00:00 -> "2024-01-15T10:00:00"
/// // 2024-01-15 10:00:00.250 -> "2024-01-15T10:00:00.250000"
/// ```
pub fn to_iso8601(timestamp: &NaiveDateTime) -> String {
    if timestamp.nanosecond() / 1_000 == 0 {
        timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
