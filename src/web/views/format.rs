//! Date display helpers.
//!
//! Stored dates are ISO-8601 text written by the admin form. Rendering is in UTC.
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Date-only and offset-less values are read as UTC.
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// `January 5, 2024`
pub fn long_date(raw: &str) -> String {
    parse(raw)
        .map(|dt| dt.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// `January 5, 2024 at 03:04 PM`
pub fn long_date_time(raw: &str) -> String {
    parse(raw)
        .map(|dt| dt.format("%B %-d, %Y at %I:%M %p").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
