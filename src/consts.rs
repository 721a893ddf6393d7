/// Jalaali years at which the 33-year leap cycle pattern changes.
///
/// Each pair of neighbours brackets a run of years sharing one cycle phase.
/// The first entry is the earliest supported year; the last one is the
/// first year past the supported range.
pub const BREAKS: [i64; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Earliest Jalaali year covered by the break-point table (inclusive)
pub const MIN_JALAALI_YEAR: i64 = BREAKS[0];

/// Latest Jalaali year covered by the break-point table (inclusive)
pub const MAX_JALAALI_YEAR: i64 = BREAKS[BREAKS.len() - 1] - 1;

/// Gregorian year minus Jalaali year for the months after Farvardin 1
pub const JALAALI_EPOCH_OFFSET: i64 = 621;

/// Lowest JDN for which the Julian Day transforms are exact (year -100100)
pub const MIN_JDN: i64 = -34_839_655;

/// Length of the Jalaali leap cycle in years
pub(crate) const CYCLE_YEARS: i64 = 33;

/// Leap years in one full 33-year cycle
pub(crate) const LEAPS_PER_CYCLE: i64 = 8;

/// Leap years counted by the Jalaali calendar before the first break point
pub(crate) const INITIAL_JALAALI_LEAPS: i64 = -14;

/// Days in Farvardin through Shahrivar (six 31-day months)
pub(crate) const FIRST_HALF_DAYS: i64 = 186;

/// Days in Mehr through Esfand of a common year
pub(crate) const SECOND_HALF_DAYS: i64 = 179;

/// Number of months in either calendar
pub const MONTHS_PER_YEAR: i64 = 12;

/// Days in Esfand of a leap year
pub const ESFAND_DAYS_LEAP: i64 = 30;

/// Days in each Jalaali month of a common year (index 0 is unused, months are 1-indexed)
pub const JALAALI_DAYS_IN_MONTH: [i64; 13] = [0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Month number for February
pub const FEBRUARY: i64 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i64 = 29;

/// Days in each Gregorian month of a common year (index 0 is unused, months are 1-indexed)
pub const GREGORIAN_DAYS_IN_MONTH: [i64; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years (unless divisible by 400)
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// Gregorian calendar cycle (400 years)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
