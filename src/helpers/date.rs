//! Date helper functions
//!
//! Post dates travel as strings. These helpers read the common
//! front-matter spellings and produce the two forms the site shows.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Formats tried in order when reading a front-matter date
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a date string into a calendar date
///
/// # Examples
/// ```ignore
/// parse_date("2024-01-15")          // -> Some(2024-01-15)
/// parse_date("2024/01/15 10:30:00") // -> Some(2024-01-15)
/// parse_date("soon")                // -> None
/// ```
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Normalize a date string to `YYYY-MM-DD`, if it parses
pub fn iso_date(s: &str) -> Option<String> {
    parse_date(s).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Today's local date as `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Long, human form of a date string (like "January 15, 2024").
///
/// Unparseable input is returned unchanged.
pub fn long_date(s: &str) -> String {
    match parse_date(s) {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => s.to_string(),
    }
}
