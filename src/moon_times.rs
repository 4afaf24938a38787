//! Moon rise and set search.
//!
//! The Moon's altitude has no closed-form crossing time, so the day is
//! scanned in two-hour windows. In each window a parabola is fitted through
//! three altitude samples one hour apart and its roots inside the window
//! become rise or set times.

#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::trace;

use crate::math::RAD;
use crate::moon::get_moon_position;
use crate::observer::Observer;
use crate::time::{hours_later, start_of_day, CivilTime};
use crate::types::CalculationError;

/// Altitude of the Moon's centre at rise and set (0.133°), in radians
const HORIZON_CORRECTION: f64 = RAD * 0.133;

/// Curvature below which a window is treated as a straight line
const MIN_CURVATURE: f64 = 1e-12;

/// Moon rise and set for one day.
///
/// Exactly one case holds: the Moon crosses the horizon at least once, or it
/// stays above it, or it stays below it for the whole day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoonTimes<T> {
    /// At least one of `rise` and `set` is present
    Crossings {
        /// Moment the Moon climbs above the horizon
        rise: Option<T>,
        /// Moment the Moon sinks below the horizon
        set: Option<T>,
    },
    /// Moon stays above the horizon all day
    AlwaysUp,
    /// Moon stays below the horizon all day
    AlwaysDown,
}

impl<T: Copy> MoonTimes<T> {
    /// Moonrise, if it happens during the day.
    pub fn rise(&self) -> Option<T> {
        match self {
            MoonTimes::Crossings { rise, .. } => *rise,
            _ => None,
        }
    }

    /// Moonset, if it happens during the day.
    pub fn set(&self) -> Option<T> {
        match self {
            MoonTimes::Crossings { set, .. } => *set,
            _ => None,
        }
    }
}

/// Parabola through (-1, h0), (0, h1), (1, h2).
pub(crate) struct QuadraticFit {
    /// Number of roots inside [-1, 1]
    pub(crate) roots: u8,
    pub(crate) x1: f64,
    pub(crate) x2: f64,
    /// Value at the vertex
    pub(crate) ye: f64,
}

impl QuadraticFit {
    pub(crate) fn new(h0: f64, h1: f64, h2: f64) -> Self {
        let a = (h0 + h2) / 2.0 - h1;
        let b = (h2 - h0) / 2.0;

        if a.abs() < MIN_CURVATURE {
            return Self {
                roots: 0,
                x1: 0.0,
                x2: 0.0,
                ye: h1,
            };
        }

        let xe = -b / (2.0 * a);
        let ye = (a * xe + b) * xe + h1;
        let d = b * b - 4.0 * a * h1;

        let mut fit = Self {
            roots: 0,
            x1: 0.0,
            x2: 0.0,
            ye,
        };
        if d >= 0.0 {
            let dx = d.sqrt() / (a.abs() * 2.0);
            let x1 = xe - dx;
            let x2 = xe + dx;
            if !(x1.is_finite() && x2.is_finite()) {
                return fit;
            }
            fit.roots = u8::from(x1.abs() <= 1.0) + u8::from(x2.abs() <= 1.0);
            // first root before the window: the second one is the crossing
            fit.x1 = if x1 < -1.0 { x2 } else { x1 };
            fit.x2 = x2;
        }
        fit
    }
}

/// Calculates moon rise and set for the day of `date` at `observer`.
///
/// The time of day of `date` is ignored: the search covers the 24 hours
/// from civil midnight (UTC). Either time may be absent when the Moon only
/// rises or only sets that day.
///
/// # Errors
///
/// [`CalculationError::TimeConversionError`] when the day is outside the
/// supported range.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use suncalc::{get_moon_times, format_date, Observer};
///
/// let date = NaiveDate::from_ymd_opt(2013, 3, 4).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let times = get_moon_times(&date, &Observer::new(50.5, 30.5).unwrap()).unwrap();
/// assert_eq!(format_date(&times.rise().unwrap()), "2013-03-04 23:57:55");
/// assert_eq!(format_date(&times.set().unwrap()), "2013-03-04 07:28:41");
/// ```
pub fn get_moon_times<T: CivilTime>(date: &T, observer: &Observer) -> Result<MoonTimes<T>, CalculationError> {
    let midnight = start_of_day(date)?;
    let altitude_at = |hours: f64| -> Result<f64, CalculationError> {
        let position = get_moon_position(&hours_later(&midnight, hours)?, observer)?;
        Ok(position.altitude - HORIZON_CORRECTION)
    };

    let mut h0 = altitude_at(0.0)?;
    let mut rise: Option<f64> = None;
    let mut set: Option<f64> = None;
    let mut ye = 0.0;

    for hour in (1..24).step_by(2) {
        let i = f64::from(hour);
        let h1 = altitude_at(i)?;
        let h2 = altitude_at(i + 1.0)?;

        let fit = QuadraticFit::new(h0, h1, h2);
        ye = fit.ye;
        trace!(
            "moon window {hour}: h = ({h0:.5}, {h1:.5}, {h2:.5}), roots {}, vertex {ye:.5}",
            fit.roots
        );

        match fit.roots {
            1 => {
                if h0 < 0.0 {
                    rise = Some(i + fit.x1);
                } else {
                    set = Some(i + fit.x1);
                }
            }
            2 => {
                let (later, earlier) = (i + fit.x2, i + fit.x1);
                if ye < 0.0 {
                    rise = Some(later);
                    set = Some(earlier);
                } else {
                    rise = Some(earlier);
                    set = Some(later);
                }
            }
            _ => {}
        }

        if rise.is_some() && set.is_some() {
            break;
        }
        h0 = h2;
    }

    Ok(match (rise, set) {
        (None, None) if ye > 0.0 => MoonTimes::AlwaysUp,
        (None, None) => MoonTimes::AlwaysDown,
        (rise, set) => MoonTimes::Crossings {
            rise: rise.map(|hours| hours_later(&midnight, hours)).transpose()?,
            set: set.map(|hours| hours_later(&midnight, hours)).transpose()?,
        },
    })
}
