//! The Jalaali (Persian, Solar Hijri) calendar.
//!
//! Leap years follow K. M. Borkowski's arithmetic rule: a 33-year cycle of
//! eight leap years whose phase shifts at the years listed in [`BREAKS`].
//! Dates are converted through [`JulianDay`] using the Gregorian date of
//! Farvardin 1 as the anchor of each year.

use serde::{Deserialize, Serialize};

use crate::consts::{
    BREAKS, CYCLE_YEARS, FIRST_HALF_DAYS, INITIAL_JALAALI_LEAPS, JALAALI_EPOCH_OFFSET,
    LEAPS_PER_CYCLE, SECOND_HALF_DAYS,
};
use crate::int_math::{trunc_div, trunc_mod};
use crate::julian_day::{self, Calendar, JulianDay};
use crate::{CalendarDate, PersianMonth};

/// Position of a Jalaali year in the leap cycle and its Gregorian anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeapInfo {
    /// Years since the last leap year, `0..=4` inside the supported range.
    /// Zero means the year itself is a leap year.
    pub leap_offset: i64,
    /// Gregorian year in which the Jalaali year begins.
    pub gregorian_year: i64,
    /// Day of March (Gregorian) on which Farvardin 1 falls.
    pub march_day: i64,
}

impl LeapInfo {
    /// Whether the Jalaali year is a leap (366-day) year
    #[inline]
    pub const fn is_leap(&self) -> bool {
        self.leap_offset == 0
    }
}

/// Computes the leap-cycle position of `jalaali_year` and the Gregorian
/// date of its first day.
///
/// Years outside `MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR` are not rejected.
/// Years past the table reuse its last bracket and years before it reuse
/// the first one, so their results are extrapolations; `leap_offset` may
/// then fall outside `0..=4`.
pub fn leap_info(jalaali_year: i64) -> LeapInfo {
    let gregorian_year = jalaali_year + JALAALI_EPOCH_OFFSET;

    // Leap years from AD 621 up to the start of the bracket holding the year.
    let mut leap_j = INITIAL_JALAALI_LEAPS;
    let mut jp = BREAKS[0];
    let mut jump = 0;
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jalaali_year < jm {
            break;
        }
        leap_j += trunc_div(jump, CYCLE_YEARS) * LEAPS_PER_CYCLE
            + trunc_div(trunc_mod(jump, CYCLE_YEARS), 4);
        jp = jm;
    }

    let mut n = jalaali_year - jp;
    leap_j += trunc_div(n, CYCLE_YEARS) * LEAPS_PER_CYCLE + trunc_div(trunc_mod(n, CYCLE_YEARS) + 3, 4);
    if trunc_mod(jump, CYCLE_YEARS) == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // The same count for the Gregorian calendar up to `gregorian_year`.
    let leap_g = trunc_div(gregorian_year, 4)
        - trunc_div((trunc_div(gregorian_year, 100) + 1) * 3, 4)
        - 150;
    let march_day = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + trunc_div(jump + 4, CYCLE_YEARS) * CYCLE_YEARS;
    }
    let mut leap_offset = trunc_mod(trunc_mod(n + 1, CYCLE_YEARS) - 1, 4);
    if leap_offset == -1 {
        leap_offset = 4;
    }

    LeapInfo {
        leap_offset,
        gregorian_year,
        march_day,
    }
}

/// Whether `jalaali_year` has 366 days.
pub fn is_leap_year(jalaali_year: i64) -> bool {
    leap_info(jalaali_year).is_leap()
}

/// Number of days in a Jalaali month, or `None` if `month` is outside `1..=12`.
///
/// See [`PersianMonth::days`] for the typed form.
pub fn month_length(jalaali_year: i64, month: i64) -> Option<i64> {
    PersianMonth::new(month).ok().map(|m| m.days(jalaali_year))
}

/// Julian Day Number of Farvardin 1 of the Jalaali year described by `info`.
fn new_year_jdn(info: &LeapInfo) -> JulianDay {
    julian_day::to_jdn(info.gregorian_year, 3, info.march_day, Calendar::Gregorian)
}

/// Converts a Jalaali date to its Julian Day Number.
///
/// Month and day are not validated.
pub fn to_jdn(year: i64, month: i64, day: i64) -> JulianDay {
    let info = leap_info(year);
    let offset = (month - 1) * 31 - trunc_div(month, 7) * (month - 7) + day - 1;
    JulianDay::new(new_year_jdn(&info).get() + offset)
}

/// Converts a Julian Day Number to a Jalaali date.
pub fn from_jdn(jdn: JulianDay) -> CalendarDate {
    let gregorian_year = julian_day::from_jdn(jdn, Calendar::Gregorian).year();
    let mut year = gregorian_year - JALAALI_EPOCH_OFFSET;
    let info = leap_info(year);

    // Days since Farvardin 1 of `year`.
    let mut k = jdn.get() - new_year_jdn(&info).get();
    if k >= 0 {
        if k < FIRST_HALF_DAYS {
            return CalendarDate::new(year, trunc_div(k, 31) + 1, trunc_mod(k, 31) + 1);
        }
        k -= FIRST_HALF_DAYS;
    } else {
        // Still in the previous Jalaali year, which began in the previous
        // Gregorian year.
        year -= 1;
        k += SECOND_HALF_DAYS;
        if info.leap_offset == 1 {
            k += 1;
        }
    }
    CalendarDate::new(year, trunc_div(k, 30) + 7, trunc_mod(k, 30) + 1)
}
