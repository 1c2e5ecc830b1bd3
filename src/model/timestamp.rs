//! cleartool timestamp helpers

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Naive formats cleartool prints, interpreted as UTC
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%d-%b-%y.%H:%M:%S",
    "%d-%b-%Y.%H:%M:%S",
    "%d-%b-%y.%H:%M",
    "%a %b %e %H:%M:%S %Y",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%y", "%d-%b-%Y"];

/// Parse a timestamp as printed by `cleartool describe`
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(text, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    })
}

/// Render `text` relative to `now`
///
/// Examples: `"42 seconds ago"`, `"3 hours ago"`, `"~2 months ago"`.
/// Unparseable input yields `"-"`.
pub fn relative_time(text: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(text) else {
        return "-".to_string();
    };

    let secs = (now - then).num_seconds().max(0) as f64;
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = MINUTE * 60.0;
    const DAY: f64 = HOUR * 24.0;
    const MONTH: f64 = DAY * 30.0;
    const YEAR: f64 = DAY * 365.0;

    if secs < MINUTE {
        format!("{} seconds ago", secs.round())
    } else if secs < HOUR {
        format!("{} minutes ago", (secs / MINUTE).round())
    } else if secs < DAY {
        format!("{} hours ago", (secs / HOUR).round())
    } else if secs < MONTH {
        format!("~{} days ago", (secs / DAY).round())
    } else if secs < YEAR {
        format!("~{} months ago", (secs / MONTH).round())
    } else {
        format!("~{} years ago", (secs / YEAR).round())
    }
}
