use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

/// Parse `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS` timestamp, or an RFC 3339
/// timestamp. Timestamps keep only their calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .ok()
}

/// Midnight at the start of the parsed date.
pub fn parse_midnight(raw: &str) -> Option<NaiveDateTime> {
    parse_date(raw).and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn month_start(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

/// First day of the calendar quarter (Jan, Apr, Jul, Oct) containing `today`.
pub fn quarter_start(today: NaiveDate) -> NaiveDate {
    let month = (today.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(today.year(), month, 1).unwrap_or(today)
}

pub fn days_ago(today: NaiveDate, days: i64) -> NaiveDate {
    today
        .checked_sub_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MIN)
}
