//! Exact conversion between the Gregorian and Jalaali (Persian) calendars.
//!
//! Every conversion pivots through a [`JulianDay`]: a Gregorian date is
//! turned into its Julian Day Number and that number into a Jalaali date,
//! or the other way round. All arithmetic is integer arithmetic with
//! division truncated toward zero.
//!
//! ```
//! use roozh::{gregorian_to_persian, persian_to_gregorian};
//!
//! let nowruz = gregorian_to_persian(2024, 3, 20);
//! assert_eq!(nowruz.to_string(), "1403-01-01");
//! assert_eq!(persian_to_gregorian(1403, 1, 1).to_string(), "2024-03-20");
//! ```

mod checked;
mod consts;
pub mod int_math;
pub mod jalaali;
pub mod julian_day;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use checked::{ConversionError, checked_gregorian_to_persian, checked_persian_to_gregorian};
pub use consts::*;
pub use jalaali::LeapInfo;
pub use julian_day::{Calendar, JulianDay};
pub use types::{PersianMonth, gregorian_days_in_month, is_gregorian_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A `(year, month, day)` triple in some calendar.
///
/// The value does not know which calendar it belongs to; the function that
/// produced it does. Fields are stored as given, so out-of-range values are
/// possible when they come from extrapolated conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDate {
    year:  i64,
    month: i64,
    day:   i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MONTHS_PER_YEAR)]
    InvalidMonth(i64),
    #[display(fmt = "Invalid day: {_0} (must be 1-31)")]
    InvalidDay(i64),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from its components without validation
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }

    /// Returns the year (astronomical numbering for Gregorian dates)
    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month, `1..=12` for valid dates
    #[inline]
    pub const fn month(&self) -> i64 {
        self.month
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> i64 {
        self.day
    }

    /// Returns the components as `(year, month, day)`
    pub const fn to_tuple(&self) -> (i64, i64, i64) {
        (self.year, self.month, self.day)
    }
}

impl From<(i64, i64, i64)> for CalendarDate {
    fn from((year, month, day): (i64, i64, i64)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (i64, i64, i64) {
    fn from(date: CalendarDate) -> Self {
        date.to_tuple()
    }
}

/// Converts a proleptic Gregorian date to the Jalaali calendar.
///
/// Inputs are not validated. Results are exact for Gregorian dates from
/// 560-03-20 through 3799-03-19 and extrapolated elsewhere; use
/// [`checked_gregorian_to_persian`] to reject such inputs.
pub fn gregorian_to_persian(year: i64, month: i64, day: i64) -> CalendarDate {
    jalaali::from_jdn(julian_day::to_jdn(year, month, day, Calendar::Gregorian))
}

/// Converts a Jalaali date to the proleptic Gregorian calendar.
///
/// Inputs are not validated. Results are exact for Jalaali years
/// `MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR` and extrapolated elsewhere; use
/// [`checked_persian_to_gregorian`] to reject such inputs.
pub fn persian_to_gregorian(year: i64, month: i64, day: i64) -> CalendarDate {
    julian_day::from_jdn(jalaali::to_jdn(year, month, day), Calendar::Gregorian)
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`, with an optional leading `-` for negative years.
    /// Month and day are checked against `1..=12` and `1..=31` only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (negative, rest) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = rest.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 2 {} separators, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            )));
        }

        let year = Self::parse_component(parts[0])?;
        let month = Self::parse_component(parts[1])?;
        let day = Self::parse_component(parts[2])?;

        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(ParseError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(ParseError::InvalidDay(day));
        }

        Ok(Self::new(if negative { -year } else { year }, month, day))
    }
}

impl CalendarDate {
    /// Helper to parse an unsigned decimal component with better error messages
    fn parse_component(s: &str) -> Result<i64, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<i64>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_persian_new_year() {
        assert_eq!(gregorian_to_persian(2024, 3, 20), date(1403, 1, 1));
        assert_eq!(persian_to_gregorian(1403, 1, 1), date(2024, 3, 20));
    }

    #[test]
    fn test_known_conversions() {
        struct TestCase {
            gregorian:   (i64, i64, i64),
            persian:     (i64, i64, i64),
            description: &'static str,
        }

        let cases = [
            TestCase {
                gregorian:   (2015, 1, 6),
                persian:     (1393, 10, 16),
                description: "mid-winter date",
            },
            TestCase {
                gregorian:   (1979, 2, 11),
                persian:     (1357, 11, 22),
                description: "22 Bahman 1357",
            },
            TestCase {
                gregorian:   (622, 3, 22),
                persian:     (1, 1, 1),
                description: "epoch of the Jalaali era",
            },
            TestCase {
                gregorian:   (1000, 1, 1),
                persian:     (378, 10, 11),
                description: "medieval date",
            },
            TestCase {
                gregorian:   (2025, 3, 20),
                persian:     (1403, 12, 30),
                description: "leap day of 1403",
            },
            TestCase {
                gregorian:   (2025, 3, 21),
                persian:     (1404, 1, 1),
                description: "new year after a leap year",
            },
            TestCase {
                gregorian:   (1970, 1, 1),
                persian:     (1348, 10, 11),
                description: "Unix epoch",
            },
        ];

        for case in &cases {
            let (gy, gm, gd) = case.gregorian;
            let (py, pm, pd) = case.persian;
            assert_eq!(
                gregorian_to_persian(gy, gm, gd),
                date(py, pm, pd),
                "gregorian_to_persian: {}",
                case.description
            );
            assert_eq!(
                persian_to_gregorian(py, pm, pd),
                date(gy, gm, gd),
                "persian_to_gregorian: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_first_day_of_common_era_is_pinned() {
        // Outside the break-point table, so this is an extrapolation.
        assert_eq!(gregorian_to_persian(1, 1, 1), date(-621, 10, 11));
    }

    #[test]
    fn test_far_future_years_extrapolate() {
        // Past the break-point table: extrapolated, but computed without overflow.
        let persian = gregorian_to_persian(2_000_000, 1, 1);
        assert_eq!(persian, date(1_999_379, 3, 11));
        assert_eq!(persian_to_gregorian(1_999_379, 3, 11), date(2_000_000, 1, 1));
    }

    #[test]
    fn test_round_trip_over_supported_range() {
        let first = julian_day::to_jdn(560, 3, 20, Calendar::Gregorian).get();
        let last = julian_day::to_jdn(3799, 3, 19, Calendar::Gregorian).get();
        for jdn in first..=last {
            let g = julian_day::from_jdn(JulianDay::new(jdn), Calendar::Gregorian);
            let p = gregorian_to_persian(g.year(), g.month(), g.day());
            assert_eq!(persian_to_gregorian(p.year(), p.month(), p.day()), g, "via {p}");
        }
    }

    #[test]
    fn test_persian_dates_increase_with_gregorian_dates() {
        let first = julian_day::to_jdn(1900, 1, 1, Calendar::Gregorian).get();
        let mut prev = gregorian_to_persian(1899, 12, 31);
        for jdn in first..first + 80_000 {
            let g = julian_day::from_jdn(JulianDay::new(jdn), Calendar::Gregorian);
            let p = gregorian_to_persian(g.year(), g.month(), g.day());
            assert!(prev < p, "{prev} should precede {p}");
            prev = p;
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1403, 1, 1).to_string(), "1403-01-01");
        assert_eq!(date(622, 3, 22).to_string(), "0622-03-22");
        assert_eq!(date(-621, 10, 11).to_string(), "-621-10-11");
        assert_eq!(date(-5, 1, 2).to_string(), "-005-01-02");
    }

    #[test]
    fn test_parse_cases() {
        struct TestCase {
            input:    &'static str,
            expected: Result<CalendarDate, ParseError>,
        }

        let cases = [
            TestCase {
                input:    "1403-01-01",
                expected: Ok(date(1403, 1, 1)),
            },
            TestCase {
                input:    " 2024-3-20 ",
                expected: Ok(date(2024, 3, 20)),
            },
            TestCase {
                input:    "-621-10-11",
                expected: Ok(date(-621, 10, 11)),
            },
            TestCase {
                input:    "",
                expected: Err(ParseError::EmptyInput),
            },
            TestCase {
                input:    "1403-13-01",
                expected: Err(ParseError::InvalidMonth(13)),
            },
            TestCase {
                input:    "1403-01-32",
                expected: Err(ParseError::InvalidDay(32)),
            },
            TestCase {
                input:    "1403-01",
                expected: Err(ParseError::InvalidFormat(
                    "Expected 2 - separators, found 1".to_owned(),
                )),
            },
            TestCase {
                input:    "1403-aa-01",
                expected: Err(ParseError::InvalidFormat("aa".to_owned())),
            },
            TestCase {
                input:    "1403--01-01",
                expected: Err(ParseError::InvalidFormat(
                    "Expected 2 - separators, found 3".to_owned(),
                )),
            },
        ];

        for case in &cases {
            assert_eq!(
                case.input.parse::<CalendarDate>(),
                case.expected,
                "input {:?}",
                case.input
            );
        }
    }

    #[test]
    fn test_display_parse_agree() {
        for d in [date(1403, 12, 30), date(-5, 1, 2), date(0, 2, 29)] {
            assert_eq!(d.to_string().parse::<CalendarDate>().unwrap(), d);
        }
    }

    #[test]
    fn test_tuple_conversions() {
        let d = CalendarDate::from((1403, 1, 1));
        assert_eq!(d.to_tuple(), (1403, 1, 1));
        let t: (i64, i64, i64) = d.into();
        assert_eq!(t, (1403, 1, 1));
    }

    #[test]
    fn test_ordering() {
        assert!(date(1402, 12, 29) < date(1403, 1, 1));
        assert!(date(1403, 1, 31) < date(1403, 2, 1));
        assert!(date(-1, 12, 31) < date(0, 1, 1));
    }

    #[test]
    fn test_serde() {
        let d = date(1403, 1, 1);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"1403-01-01\"");

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);

        assert!(serde_json::from_str::<CalendarDate>("\"1403-00-01\"").is_err());
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
    }
}
