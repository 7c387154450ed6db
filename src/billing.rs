use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::dates::parse_midnight;
use crate::models::BusinessRecord;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Next billing date strictly after `now`.
///
/// Billing recurs every `cycle_days` days from the signup date (at midnight).
/// A due date landing exactly on `now` is already past, so the following cycle
/// is returned. Returns `None` when the signup date does not parse or the cycle
/// is zero.
pub fn next_due(signup_date: &str, cycle_days: u32, now: NaiveDateTime) -> Option<NaiveDateTime> {
    if cycle_days == 0 {
        return None;
    }
    let signup = parse_midnight(signup_date)?;
    if signup > now {
        return Some(signup);
    }
    let cycle = Duration::days(i64::from(cycle_days));
    let elapsed = (now - signup).num_milliseconds();
    let cycles = elapsed / cycle.num_milliseconds() + 1;
    let offset = Duration::days(cycles.checked_mul(i64::from(cycle_days))?);
    signup.checked_add_signed(offset)
}

/// Whole days from `a` to `b`, rounded to nearest with halves toward +inf.
pub fn days_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    let ms = (b - a).num_milliseconds() as f64;
    (ms / MS_PER_DAY + 0.5).floor() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDate {
    pub due: NaiveDate,
    pub days_left: i64,
}

/// Next due date of a record and the days remaining until it.
pub fn billing_status(record: &BusinessRecord, now: NaiveDateTime) -> Option<DueDate> {
    let due = next_due(&record.signup_date, record.billing_cycle_days, now)?;
    Some(DueDate {
        due: due.date(),
        days_left: days_between(now, due),
    })
}
