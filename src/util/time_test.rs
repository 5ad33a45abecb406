use super::*;
use chrono::TimeZone;

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_rfc3339_with_offset() {
    let parsed = parse_iso("2025-06-01T10:00:00Z").expect("parsed");
    assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap());
}

#[test]
fn parses_bare_isoformat_as_utc() {
    let parsed = parse_iso("2025-06-01T10:00:00.123456").expect("parsed");
    assert_eq!(parsed.timestamp(), 1_748_772_000);
}

#[test]
fn rejects_garbage() {
    assert_eq!(parse_iso("yesterday-ish"), None);
}

// =============================================================
// Relative age labels
// =============================================================

#[test]
fn same_day_is_today() {
    assert_eq!(relative_age("2025-06-01T08:00:00", at(2025, 6, 1)), "Today");
}

#[test]
fn one_day_back_is_yesterday() {
    assert_eq!(relative_age("2025-05-31T23:00:00", at(2025, 6, 1)), "Yesterday");
}

#[test]
fn under_a_week_counts_days() {
    assert_eq!(relative_age("2025-05-29T10:00:00", at(2025, 6, 1)), "3 days ago");
}

#[test]
fn beyond_a_week_shows_plain_date() {
    assert_eq!(relative_age("2025-05-01T10:00:00", at(2025, 6, 1)), "2025-05-01");
}

#[test]
fn unparseable_input_is_echoed() {
    assert_eq!(relative_age("???", at(2025, 6, 1)), "???");
}
