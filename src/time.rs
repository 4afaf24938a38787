use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use julian_day_converter::{julian_day_to_unix_millis, unix_millis_to_julian_day};

use crate::types::CalculationError;

/// Julian day of the J2000.0 epoch
pub(crate) const J2000: f64 = 2_451_545.0;

/// Earliest calendar year accepted by the calculator
pub const MIN_YEAR: i32 = -2000;

/// Latest calendar year accepted by the calculator
pub const MAX_YEAR: i32 = 6000;

const MILLIS_PER_DAY: i64 = 86_400_000;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// The civil calendar contract the engine needs from a date type.
///
/// Every value is read as a UTC instant. The engine only ever asks for a
/// continuous count of milliseconds since the Unix epoch and for the way
/// back, so any calendar library can be plugged in by implementing these
/// three methods. Implementations are provided for [`NaiveDateTime`]
/// (interpreted as UTC) and [`DateTime<Utc>`].
pub trait CivilTime: Copy + Sized {
    /// Milliseconds since 1970-01-01 00:00:00 UTC.
    fn unix_millis(&self) -> i64;

    /// Builds an instant from milliseconds since the Unix epoch, or `None`
    /// when the calendar cannot represent it.
    fn from_unix_millis(millis: i64) -> Option<Self>;

    /// Calendar year of the instant.
    fn civil_year(&self) -> i32;
}

impl CivilTime for NaiveDateTime {
    fn unix_millis(&self) -> i64 {
        self.and_utc().timestamp_millis()
    }

    fn from_unix_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
    }

    fn civil_year(&self) -> i32 {
        self.year()
    }
}

impl CivilTime for DateTime<Utc> {
    fn unix_millis(&self) -> i64 {
        self.timestamp_millis()
    }

    fn from_unix_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis)
    }

    fn civil_year(&self) -> i32 {
        self.year()
    }
}

/// Compute the Julian day for a civil instant.
///
/// The instant is turned into a continuous day count since the Unix epoch
/// and shifted by the Julian day of 1970-01-01 00:00 UTC (2440587.5), so
/// civil midnight lands on a `.5` Julian day.
///
/// # Errors
///
/// [`CalculationError::TimeConversionError`] when the year lies outside
/// [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn to_julian_day<T: CivilTime>(date: &T) -> Result<f64, CalculationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.civil_year()) {
        return Err(CalculationError::TimeConversionError);
    }
    Ok(unix_millis_to_julian_day(date.unix_millis()))
}

/// Convert a Julian day back to a civil instant.
///
/// Inverse of [`to_julian_day`]: round-tripping an instant reproduces it to
/// the millisecond.
///
/// # Errors
///
/// [`CalculationError::TimeConversionError`] for non-finite values or
/// values the calendar type cannot represent.
pub fn from_julian_day<T: CivilTime>(julian_day: f64) -> Result<T, CalculationError> {
    if !julian_day.is_finite() {
        return Err(CalculationError::TimeConversionError);
    }
    T::from_unix_millis(julian_day_to_unix_millis(julian_day)).ok_or(CalculationError::TimeConversionError)
}

/// Days since the J2000.0 epoch, the independent variable of the solar and
/// lunar models.
pub fn to_days<T: CivilTime>(date: &T) -> Result<f64, CalculationError> {
    Ok(to_julian_day(date)? - J2000)
}

/// Returns the instant `hours` after `date`, rounded to the millisecond.
pub(crate) fn hours_later<T: CivilTime>(date: &T, hours: f64) -> Result<T, CalculationError> {
    let offset = (hours * MILLIS_PER_HOUR).round();
    if !offset.is_finite() {
        return Err(CalculationError::TimeConversionError);
    }
    date.unix_millis()
        .checked_add(offset as i64)
        .and_then(T::from_unix_millis)
        .ok_or(CalculationError::TimeConversionError)
}

/// Civil midnight (UTC) of the day containing `date`.
pub(crate) fn start_of_day<T: CivilTime>(date: &T) -> Result<T, CalculationError> {
    let millis = date.unix_millis().div_euclid(MILLIS_PER_DAY) * MILLIS_PER_DAY;
    T::from_unix_millis(millis).ok_or(CalculationError::TimeConversionError)
}
