//! Display formatting for episode listings.

use crate::error::{CatalogError, Result};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Format a duration in seconds as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped, so very long durations keep growing the hour
/// field (`360000` -> `"100:00:00"`).
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format an API publication timestamp as `d MMM yy` in Brazilian Portuguese.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and bare
/// dates. Timestamps with an offset keep the calendar date of that offset.
pub fn format_published_at(raw: &str) -> Result<String> {
    let date = parse_published_at(raw)?;
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::default()));
    Ok(midnight.format_localized("%-d %b %y", Locale::pt_BR).to_string())
}

fn parse_published_at(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CatalogError::InvalidDate(raw.to_string()))
}
