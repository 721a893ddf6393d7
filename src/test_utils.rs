//! Shared helpers for unit tests.

use crate::CalendarDate;

pub fn date(year: i64, month: i64, day: i64) -> CalendarDate {
    CalendarDate::new(year, month, day)
}

/// Month lengths under the Julian rule, where every fourth year is a leap year.
pub fn julian_days_in_month(year: i64, month: i64) -> i64 {
    match month {
        2 if year % 4 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
