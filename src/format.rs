use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::time::CivilTime;
use crate::types::CalculationError;

/// Renders `number` with leading zeros up to `zeros` characters.
///
/// Longer numbers are returned unchanged.
///
/// ```
/// use suncalc::pad;
///
/// assert_eq!(pad(7, 2), "07");
/// assert_eq!(pad(2013, 2), "2013");
/// ```
pub fn pad(number: i64, zeros: usize) -> String {
    let digits = number.to_string();
    let mut padded = "0".repeat(zeros.saturating_sub(digits.len()));
    padded.push_str(&digits);
    padded
}

/// Formats a calendar instant as `YYYY-MM-DD HH:MM:SS`.
///
/// Fractions of a second are dropped. Works with any chrono date-time, so
/// results can be shown in a local time zone with `DateTime::with_timezone`.
pub fn format_date<T: Datelike + Timelike>(date: &T) -> String {
    format!(
        "{}-{}-{} {}:{}:{}",
        pad(i64::from(date.year()), 4),
        pad(i64::from(date.month()), 2),
        pad(i64::from(date.day()), 2),
        pad(i64::from(date.hour()), 2),
        pad(i64::from(date.minute()), 2),
        pad(i64::from(date.second()), 2),
    )
}

/// Parses a `YYYY-MM-DD HH:MM:SS` timestamp.
///
/// Fields may also be separated by `T`, and trailing time fields may be
/// left out (`"2013-03-05"` is midnight).
///
/// # Errors
///
/// [`CalculationError::InvalidDateFormat`] when the text has fewer than
/// three or more than six numeric fields, or names an invalid date.
pub fn parse_date(text: &str) -> Result<NaiveDateTime, CalculationError> {
    let fields = text
        .trim()
        .split([' ', ':', '-', 'T'])
        .filter(|field| !field.is_empty())
        .map(str::parse::<u32>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| CalculationError::InvalidDateFormat)?;

    if !(3..=6).contains(&fields.len()) {
        return Err(CalculationError::InvalidDateFormat);
    }
    let field = |i: usize| fields.get(i).copied().unwrap_or(0);
    let year = i32::try_from(field(0)).map_err(|_| CalculationError::InvalidDateFormat)?;

    NaiveDate::from_ymd_opt(year, field(1), field(2))
        .and_then(|date| date.and_hms_opt(field(3), field(4), field(5)))
        .ok_or(CalculationError::InvalidDateFormat)
}

/// Whether two timestamps lie within `tolerance_seconds` of each other.
///
/// ```
/// use suncalc::dates_near;
///
/// assert!(dates_near("2013-03-05 04:34:56", "2013-03-05 04:38:00", 300).unwrap());
/// assert!(!dates_near("2013-03-05 04:34:56", "2013-03-05 05:34:56", 300).unwrap());
/// ```
pub fn dates_near(a: &str, b: &str, tolerance_seconds: i64) -> Result<bool, CalculationError> {
    let a = parse_date(a)?.unix_millis();
    let b = parse_date(b)?.unix_millis();
    Ok((a - b).abs() < tolerance_seconds.saturating_mul(1000))
}
