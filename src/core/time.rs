// src/core/time.rs
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};

/// ESPN dates come as full RFC 3339 or as "2024-09-08T17:00Z" (no seconds).
pub fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%dT%H:%M:%S%.fZ"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}

/// US Eastern offset for `utc`: EDT from the second Sunday of March 07:00 UTC
/// to the first Sunday of November 06:00 UTC, EST otherwise.
pub fn eastern_offset(utc: &DateTime<Utc>) -> FixedOffset {
    const EST: i32 = -5 * 3600;
    const EDT: i32 = -4 * 3600;

    let year = utc.year();
    let start = NaiveDate::from_weekday_of_month_opt(year, 3, Weekday::Sun, 2)
        .and_then(|d| d.and_hms_opt(7, 0, 0));
    let end = NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Sun, 1)
        .and_then(|d| d.and_hms_opt(6, 0, 0));

    let secs = match (start, end) {
        (Some(s), Some(e)) => {
            let n = utc.naive_utc();
            if n >= s && n < e { EDT } else { EST }
        }
        _ => EST,
    };
    FixedOffset::east_opt(secs).expect("offset within a day")
}

/// "Sun, Sep 08 01:00 PM ET", or "TBD" without a date.
pub fn to_eastern(dt: Option<&DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => {
            let local = dt.with_timezone(&eastern_offset(dt));
            format!("{} ET", local.format("%a, %b %d %I:%M %p"))
        }
        None => s!("TBD"),
    }
}
