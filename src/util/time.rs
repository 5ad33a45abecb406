//! ISO-8601 timestamps and relative-age labels for the history list.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Current instant as an ISO-8601 UTC string, millisecond precision.
pub fn now_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Parse a backend timestamp. The backend emits bare `isoformat()` strings
/// without an offset; RFC 3339 strings with an offset are accepted too.
pub fn parse_iso(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Human label for how old a timestamp is, relative to `now`:
/// "Today", "Yesterday", "N days ago", or the plain date beyond a week.
/// Unparseable input is echoed back unchanged.
pub fn relative_age(value: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_iso(value) else {
        return value.to_owned();
    };
    let days = (now.date_naive() - then.date_naive()).num_days();
    match days {
        i64::MIN..=0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        2..=6 => format!("{days} days ago"),
        _ => then.format("%Y-%m-%d").to_string(),
    }
}
