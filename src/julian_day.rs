//! Julian Day Numbers for the Gregorian and Julian calendars.
//!
//! The transforms follow D. A. Hatcher, Q. Jl. R. Astron. Soc. 25 (1984),
//! 53-55, as modified by K. M. Borkowski, Post. Astron. 25 (1987), 275-279.
//! They are exact from 1 March of year -100100 (JDN -34839655) onward.
//! Years are astronomical: 1 BC is year 0, 2 BC is year -1 and so on.
//!
//! Each nested division truncates on its own; folding them together
//! changes the result for some dates. Intermediates are `i64`, so `4 * jdn`
//! stays in range for day numbers up to about 2.3e18.

use serde::{Deserialize, Serialize};

use crate::int_math::{trunc_div, trunc_mod};
use crate::{CalendarDate, prelude::*};

/// Selects the leap-year rule used by the Julian Day transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Calendar {
    /// Every fourth year is a leap year.
    #[display(fmt = "Julian")]
    Julian,
    /// Proleptic Gregorian: the century correction is applied.
    #[display(fmt = "Gregorian")]
    Gregorian,
}

/// A Julian Day Number: whole days counted from noon of 1 January 4713 BC
/// (proleptic Julian).
///
/// The value carries no calendar identity; it is the pivot between calendars.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct JulianDay(i64);

impl JulianDay {
    /// Wraps a raw day number.
    pub const fn new(jdn: i64) -> Self {
        Self(jdn)
    }

    /// Returns the raw day number
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day number of a date in the given calendar.
    pub const fn from_calendar(year: i64, month: i64, day: i64, calendar: Calendar) -> Self {
        to_jdn(year, month, day, calendar)
    }

    /// Date of this day in the given calendar.
    pub const fn to_calendar(self, calendar: Calendar) -> CalendarDate {
        from_jdn(self, calendar)
    }

    /// ISO 8601 day of week, `1..=7` for Monday through Sunday.
    pub const fn weekday(self) -> i64 {
        self.0.rem_euclid(7) + 1
    }
}

/// Converts a Gregorian or Julian calendar date to its Julian Day Number.
///
/// Month and day are not validated; out-of-range fields extrapolate
/// (for example day 0 is the last day of the previous month).
pub const fn to_jdn(year: i64, month: i64, day: i64, calendar: Calendar) -> JulianDay {
    let mut res = trunc_div((year + trunc_div(month - 8, 6) + 100_100) * 1461, 4)
        + trunc_div(153 * trunc_mod(month + 9, 12) + 2, 5)
        + day
        - 34_840_408;
    if matches!(calendar, Calendar::Gregorian) {
        res += 752 - trunc_div(trunc_div(year + 100_100 + trunc_div(month - 8, 6), 100) * 3, 4);
    }
    JulianDay(res)
}

/// Converts a Julian Day Number to a date in the given calendar.
///
/// No range check is made below [`MIN_JDN`](crate::MIN_JDN); such inputs
/// yield extrapolated dates.
pub const fn from_jdn(jdn: JulianDay, calendar: Calendar) -> CalendarDate {
    let jdn = jdn.0;
    let mut j = 4 * jdn + 139_361_631;
    if matches!(calendar, Calendar::Gregorian) {
        j += trunc_div(trunc_div(4 * jdn + 183_187_720, 146_097) * 3, 4) * 4 - 3908;
    }
    let i = trunc_div(trunc_mod(j, 1461), 4) * 5 + 308;
    let day = trunc_div(trunc_mod(i, 153), 5) + 1;
    let month = trunc_mod(trunc_div(i, 153), 12) + 1;
    let year = trunc_div(j, 1461) - 100_100 + trunc_div(8 - month, 6);
    CalendarDate::new(year, month, day)
}
