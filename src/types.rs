use crate::consts::{
    CENTURY_CYCLE, ESFAND_DAYS_LEAP, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, JALAALI_DAYS_IN_MONTH, LEAP_YEAR_CYCLE,
};
use crate::jalaali;
use crate::prelude::*;
use crate::ParseError;
use serde::{Deserialize, Serialize};

/// A month of the Jalaali calendar, numbered `1..=12` from Farvardin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum PersianMonth {
    #[display(fmt = "Farvardin")]
    Farvardin = 1,
    #[display(fmt = "Ordibehesht")]
    Ordibehesht,
    #[display(fmt = "Khordad")]
    Khordad,
    #[display(fmt = "Tir")]
    Tir,
    #[display(fmt = "Mordad")]
    Mordad,
    #[display(fmt = "Shahrivar")]
    Shahrivar,
    #[display(fmt = "Mehr")]
    Mehr,
    #[display(fmt = "Aban")]
    Aban,
    #[display(fmt = "Azar")]
    Azar,
    #[display(fmt = "Dey")]
    Dey,
    #[display(fmt = "Bahman")]
    Bahman,
    #[display(fmt = "Esfand")]
    Esfand,
}

impl PersianMonth {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::Farvardin,
        Self::Ordibehesht,
        Self::Khordad,
        Self::Tir,
        Self::Mordad,
        Self::Shahrivar,
        Self::Mehr,
        Self::Aban,
        Self::Azar,
        Self::Dey,
        Self::Bahman,
        Self::Esfand,
    ];

    /// Creates a month from its number
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is outside `1..=12`.
    pub fn new(value: i64) -> Result<Self, ParseError> {
        usize::try_from(value)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(ParseError::InvalidMonth(value))
    }

    /// Returns the month number, `1..=12`
    #[inline]
    pub const fn number(self) -> i64 {
        self as i64
    }

    /// Number of days in this month of the given Jalaali year: 31 for the
    /// first six months, 30 for the next five, and 29 or 30 for Esfand.
    pub fn days(self, jalaali_year: i64) -> i64 {
        if self == Self::Esfand && jalaali::is_leap_year(jalaali_year) {
            ESFAND_DAYS_LEAP
        } else {
            JALAALI_DAYS_IN_MONTH[self as usize]
        }
    }
}

impl TryFrom<u8> for PersianMonth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl TryFrom<i64> for PersianMonth {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PersianMonth> for u8 {
    fn from(month: PersianMonth) -> Self {
        month as Self
    }
}

// Helper functions

/// Proleptic Gregorian leap-year rule. Years are astronomical (year 0 is 1 BC).
pub const fn is_gregorian_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in a Gregorian month, or `None` if `month` is outside `1..=12`
pub fn gregorian_days_in_month(year: i64, month: i64) -> Option<i64> {
    if month == FEBRUARY && is_gregorian_leap_year(year) {
        return Some(FEBRUARY_DAYS_LEAP);
    }
    usize::try_from(month)
        .ok()
        .filter(|&m| m >= 1)
        .and_then(|m| GREGORIAN_DAYS_IN_MONTH.get(m).copied())
}
