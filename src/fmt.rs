use chrono::NaiveDate;

use crate::dates::parse_date;

pub const DASH: &str = "\u{2014}";

/// Short display date: "Jul 28, 2023".
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Display form of a stored date string, or a dash when it does not parse.
pub fn date_text(raw: &str) -> String {
    parse_date(raw).map(short_date).unwrap_or_else(|| DASH.to_string())
}

pub fn days_left(days: i64) -> String {
    format!("{days} day(s) left")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        let d = NaiveDate::from_ymd_opt(2023, 7, 8).unwrap();
        assert_eq!(short_date(d), "Jul 08, 2023");
    }

    #[test]
    fn test_date_text() {
        assert_eq!(date_text("2024-01-01"), "Jan 01, 2024");
        assert_eq!(date_text("garbage"), DASH);
    }

    #[test]
    fn test_days_left() {
        assert_eq!(days_left(17), "17 day(s) left");
    }
}
