//! Millisecond epoch timestamps and strftime style formatting.
//!
//! Timestamps are `f64` milliseconds since 1970-01-01T00:00:00Z, the unit
//! used by JavaScript and ICU dates.

use std::fmt::Write;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::error::{Error, Result};

/// Returns the current time in milliseconds since the Unix epoch.
pub fn now_millis() -> f64 {
    Utc::now().timestamp_millis() as f64
}

/// Converts a millisecond timestamp to whole seconds, truncating.
pub fn millis_to_seconds(millis: f64) -> i64 {
    (millis / 1000.0) as i64
}

pub fn seconds_to_millis(seconds: i64) -> f64 {
    seconds as f64 * 1000.0
}

/// Formats a millisecond timestamp in UTC.
///
/// # Arguments
///
/// * `millis` - Milliseconds since the Unix epoch.
/// * `format` - A strftime style format string, e.g. `"%a, %d %b %Y %H:%M:%S GMT"`.
///
/// # Returns
///
/// The formatted date, or an error if the format string contains an unknown
/// specifier or the timestamp cannot be represented.
///
/// # Example
/// ```
/// use webutil::date::format_date;
/// let s = format_date(0.0, "%a, %d %b %Y %H:%M:%S GMT").unwrap();
/// assert_eq!(s, "Thu, 01 Jan 1970 00:00:00 GMT");
/// ```
pub fn format_date(millis: f64, format: &str) -> Result<String> {
    render(&timestamp(millis)?, format)
}

/// Formats a millisecond timestamp at a fixed offset from UTC.
pub fn format_date_with_offset(millis: f64, format: &str, offset: FixedOffset) -> Result<String> {
    render(&timestamp(millis)?.with_timezone(&offset), format)
}

fn timestamp(millis: f64) -> Result<DateTime<Utc>> {
    if !millis.is_finite() {
        return Err(Error::DateRange(millis));
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or(Error::DateRange(millis))
}

fn render<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    // chrono reports unknown specifiers as a fmt::Error at write time
    if write!(out, "{}", date.format(format)).is_err() {
        tracing::debug!(format, "rejecting date format string");
        return Err(Error::DateFormat(format.to_string()));
    }
    Ok(out)
}
