//! Validating variants of the public conversions.
//!
//! [`gregorian_to_persian`] and [`persian_to_gregorian`] extrapolate silently
//! for any input. The functions here reject fields that do not name a real
//! date and years outside the range covered by the leap-cycle table.

use crate::consts::{JALAALI_EPOCH_OFFSET, MAX_JALAALI_YEAR, MIN_JALAALI_YEAR};
use crate::types::gregorian_days_in_month;
use crate::{CalendarDate, gregorian_to_persian, jalaali, persian_to_gregorian};

/// Error type for validated conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Jalaali year outside the break-point table.
    #[error("Jalaali year {0} is out of range (must be {min} to {max})", min = MIN_JALAALI_YEAR, max = MAX_JALAALI_YEAR)]
    JalaaliYearOutOfRange(i64),

    /// Gregorian date whose Jalaali image lies outside the break-point table.
    #[error("Gregorian date {0} maps outside the supported Jalaali years")]
    GregorianDateOutOfRange(CalendarDate),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(i64),

    /// Day outside the length of its month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: i64, day: i64 },
}

/// `month_days` is the length of the month, `None` when the month is invalid.
fn check_fields(
    year: i64,
    month: i64,
    day: i64,
    month_days: Option<i64>,
) -> Result<(), ConversionError> {
    let max_day = month_days.ok_or(ConversionError::InvalidMonth(month))?;
    if (1..=max_day).contains(&day) {
        Ok(())
    } else {
        Err(ConversionError::InvalidDay { year, month, day })
    }
}

/// Converts a Gregorian date to the Jalaali calendar, rejecting invalid
/// dates and dates outside the supported range.
///
/// # Errors
/// Returns `ConversionError::InvalidMonth` or `ConversionError::InvalidDay`
/// for fields that do not form a Gregorian date, and
/// `ConversionError::GregorianDateOutOfRange` when the result would fall
/// outside the supported Jalaali years.
pub fn checked_gregorian_to_persian(
    year: i64,
    month: i64,
    day: i64,
) -> Result<CalendarDate, ConversionError> {
    check_fields(year, month, day, gregorian_days_in_month(year, month))?;

    let input = CalendarDate::new(year, month, day);
    let first = MIN_JALAALI_YEAR + JALAALI_EPOCH_OFFSET;
    let last = MAX_JALAALI_YEAR + JALAALI_EPOCH_OFFSET + 1;
    if !(first..=last).contains(&year) {
        return Err(ConversionError::GregorianDateOutOfRange(input));
    }

    let persian = gregorian_to_persian(year, month, day);
    if (MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR).contains(&persian.year()) {
        Ok(persian)
    } else {
        Err(ConversionError::GregorianDateOutOfRange(input))
    }
}

/// Converts a Jalaali date to the Gregorian calendar, rejecting invalid
/// dates and years outside the supported range.
///
/// # Errors
/// Returns `ConversionError::JalaaliYearOutOfRange` for years outside
/// `MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR`, and `ConversionError::InvalidMonth`
/// or `ConversionError::InvalidDay` for fields that do not form a Jalaali date.
pub fn checked_persian_to_gregorian(
    year: i64,
    month: i64,
    day: i64,
) -> Result<CalendarDate, ConversionError> {
    if !(MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR).contains(&year) {
        return Err(ConversionError::JalaaliYearOutOfRange(year));
    }
    check_fields(year, month, day, jalaali::month_length(year, month))?;

    Ok(persian_to_gregorian(year, month, day))
}
