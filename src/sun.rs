use alloc::collections::BTreeMap;
use alloc::string::String;
use core::f64::consts::PI;

use chrono::{Datelike, Timelike};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::debug;

use crate::format::format_date;
use crate::math::{
    altitude, azimuth, declination, hour_angle, hour_angle_cosine, observer_angle, right_ascension, sidereal_time, RAD,
};
use crate::observer::Observer;
use crate::time::{from_julian_day, to_days, CivilTime, J2000};
use crate::types::{CalculationError, EquatorialCoords, SunPosition};

/// Correction between the mean solar transit and the day count
const J0: f64 = 0.0009;

/// Longitude of the Earth's perihelion in degrees
const PERIHELION: f64 = 102.9372;

/// Named sun phase events reported by [`get_times`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SunEvent {
    /// Sun at its highest, on the meridian
    SolarNoon,
    /// Darkest moment of the night, twelve hours from solar noon
    Nadir,
    /// Top edge of the Sun appears on the horizon
    Sunrise,
    /// Sun disappears below the horizon, evening civil twilight starts
    Sunset,
    /// Bottom edge of the Sun touches the horizon
    SunriseEnd,
    /// Bottom edge of the Sun touches the horizon
    SunsetStart,
    /// Morning civil twilight starts
    Dawn,
    /// Evening nautical twilight starts
    Dusk,
    /// Morning nautical twilight starts
    NauticalDawn,
    /// Evening astronomical twilight starts
    NauticalDusk,
    /// Morning astronomical twilight starts
    NightEnd,
    /// Dark enough for astronomical observations
    Night,
    /// Morning golden hour ends
    GoldenHourEnd,
    /// Evening golden hour starts
    GoldenHour,
}

impl SunEvent {
    /// All events in the order they happen around a normal day.
    pub const CHRONOLOGICAL: [SunEvent; 14] = [
        SunEvent::Nadir,
        SunEvent::NightEnd,
        SunEvent::NauticalDawn,
        SunEvent::Dawn,
        SunEvent::Sunrise,
        SunEvent::SunriseEnd,
        SunEvent::GoldenHourEnd,
        SunEvent::SolarNoon,
        SunEvent::GoldenHour,
        SunEvent::SunsetStart,
        SunEvent::Sunset,
        SunEvent::Dusk,
        SunEvent::NauticalDusk,
        SunEvent::Night,
    ];

    /// The conventional camelCase name of the event, e.g. `"nauticalDawn"`.
    pub const fn name(self) -> &'static str {
        match self {
            SunEvent::SolarNoon => "solarNoon",
            SunEvent::Nadir => "nadir",
            SunEvent::Sunrise => "sunrise",
            SunEvent::Sunset => "sunset",
            SunEvent::SunriseEnd => "sunriseEnd",
            SunEvent::SunsetStart => "sunsetStart",
            SunEvent::Dawn => "dawn",
            SunEvent::Dusk => "dusk",
            SunEvent::NauticalDawn => "nauticalDawn",
            SunEvent::NauticalDusk => "nauticalDusk",
            SunEvent::NightEnd => "nightEnd",
            SunEvent::Night => "night",
            SunEvent::GoldenHourEnd => "goldenHourEnd",
            SunEvent::GoldenHour => "goldenHour",
        }
    }
}

/// A sun altitude and the pair of events that happen when the Sun crosses it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SunThreshold {
    /// Altitude of the Sun's centre in degrees
    pub degrees: f64,
    /// Event when the Sun climbs through the altitude
    pub rise: SunEvent,
    /// Event when the Sun sinks through the altitude
    pub set: SunEvent,
}

/// Altitude thresholds evaluated by [`get_times`].
pub const SUN_THRESHOLDS: [SunThreshold; 6] = [
    SunThreshold {
        degrees: -0.833,
        rise: SunEvent::Sunrise,
        set: SunEvent::Sunset,
    },
    SunThreshold {
        degrees: -0.3,
        rise: SunEvent::SunriseEnd,
        set: SunEvent::SunsetStart,
    },
    SunThreshold {
        degrees: -6.0,
        rise: SunEvent::Dawn,
        set: SunEvent::Dusk,
    },
    SunThreshold {
        degrees: -12.0,
        rise: SunEvent::NauticalDawn,
        set: SunEvent::NauticalDusk,
    },
    SunThreshold {
        degrees: -18.0,
        rise: SunEvent::NightEnd,
        set: SunEvent::Night,
    },
    SunThreshold {
        degrees: 6.0,
        rise: SunEvent::GoldenHourEnd,
        set: SunEvent::GoldenHour,
    },
];

/// Result of a sun threshold crossing (sunrise/sunset, twilight, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarEventResult<T> {
    /// The Sun climbs through the threshold at `rise` and sinks through it at `set`
    Occurs {
        /// Morning crossing
        rise: T,
        /// Evening crossing
        set: T,
    },
    /// Sun is always above the threshold (e.g., midnight sun)
    AllDay,
    /// Sun is always below the threshold (e.g., polar night)
    AllNight,
}

impl<T> SolarEventResult<T> {
    /// The `(rise, set)` pair, or `None` if the threshold is never crossed.
    pub fn times(self) -> Option<(T, T)> {
        match self {
            SolarEventResult::Occurs { rise, set } => Some((rise, set)),
            _ => None,
        }
    }
}

/// Sun phase times for one day and location.
///
/// Solar noon and nadir always exist. Every other event is `None` when the
/// Sun does not reach its threshold that day, e.g. `night` during the white
/// nights of high latitudes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunTimes<T> {
    pub solar_noon: T,
    pub nadir: T,
    pub sunrise: Option<T>,
    pub sunset: Option<T>,
    pub sunrise_end: Option<T>,
    pub sunset_start: Option<T>,
    pub dawn: Option<T>,
    pub dusk: Option<T>,
    pub nautical_dawn: Option<T>,
    pub nautical_dusk: Option<T>,
    pub night_end: Option<T>,
    pub night: Option<T>,
    pub golden_hour_end: Option<T>,
    pub golden_hour: Option<T>,
}

impl<T: CivilTime> SunTimes<T> {
    fn new(solar_noon: T, nadir: T) -> Self {
        Self {
            solar_noon,
            nadir,
            sunrise: None,
            sunset: None,
            sunrise_end: None,
            sunset_start: None,
            dawn: None,
            dusk: None,
            nautical_dawn: None,
            nautical_dusk: None,
            night_end: None,
            night: None,
            golden_hour_end: None,
            golden_hour: None,
        }
    }

    fn slot(&mut self, event: SunEvent) -> Option<&mut Option<T>> {
        match event {
            SunEvent::SolarNoon | SunEvent::Nadir => None,
            SunEvent::Sunrise => Some(&mut self.sunrise),
            SunEvent::Sunset => Some(&mut self.sunset),
            SunEvent::SunriseEnd => Some(&mut self.sunrise_end),
            SunEvent::SunsetStart => Some(&mut self.sunset_start),
            SunEvent::Dawn => Some(&mut self.dawn),
            SunEvent::Dusk => Some(&mut self.dusk),
            SunEvent::NauticalDawn => Some(&mut self.nautical_dawn),
            SunEvent::NauticalDusk => Some(&mut self.nautical_dusk),
            SunEvent::NightEnd => Some(&mut self.night_end),
            SunEvent::Night => Some(&mut self.night),
            SunEvent::GoldenHourEnd => Some(&mut self.golden_hour_end),
            SunEvent::GoldenHour => Some(&mut self.golden_hour),
        }
    }

    /// Time of `event`, if it happens.
    pub fn get(&self, event: SunEvent) -> Option<T> {
        match event {
            SunEvent::SolarNoon => Some(self.solar_noon),
            SunEvent::Nadir => Some(self.nadir),
            SunEvent::Sunrise => self.sunrise,
            SunEvent::Sunset => self.sunset,
            SunEvent::SunriseEnd => self.sunrise_end,
            SunEvent::SunsetStart => self.sunset_start,
            SunEvent::Dawn => self.dawn,
            SunEvent::Dusk => self.dusk,
            SunEvent::NauticalDawn => self.nautical_dawn,
            SunEvent::NauticalDusk => self.nautical_dusk,
            SunEvent::NightEnd => self.night_end,
            SunEvent::Night => self.night,
            SunEvent::GoldenHourEnd => self.golden_hour_end,
            SunEvent::GoldenHour => self.golden_hour,
        }
    }

    /// Present events, in [`SunEvent::CHRONOLOGICAL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SunEvent, T)> + '_ {
        SunEvent::CHRONOLOGICAL
            .into_iter()
            .filter_map(|event| self.get(event).map(|time| (event, time)))
    }
}

impl<T: CivilTime + Datelike + Timelike> SunTimes<T> {
    /// Event names mapped to `YYYY-MM-DD HH:MM:SS` timestamps.
    ///
    /// Events that do not happen are left out of the map.
    pub fn to_formatted(&self) -> BTreeMap<&'static str, String> {
        self.iter().map(|(event, time)| (event.name(), format_date(&time))).collect()
    }
}

pub(crate) fn solar_mean_anomaly(d: f64) -> f64 {
    RAD * (357.5291 + 0.985_600_28 * d)
}

/// Ecliptic longitude of the Sun from its mean anomaly `m`.
pub(crate) fn ecliptic_longitude(m: f64) -> f64 {
    // equation of center
    let c = RAD * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    m + c + RAD * PERIHELION + PI
}

/// Equatorial coordinates of the Sun `d` days after J2000.0.
pub(crate) fn sun_coords(d: f64) -> EquatorialCoords {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    EquatorialCoords {
        right_ascension: right_ascension(l, 0.0),
        declination: declination(l, 0.0),
    }
}

fn julian_cycle(d: f64, lw: f64) -> f64 {
    (d - J0 - lw / (2.0 * PI)).round()
}

fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / (2.0 * PI) + n
}

fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Crossing of a single altitude threshold, in Julian days.
enum Crossing {
    Occurs { rise: f64, set: f64 },
    AllDay,
    AllNight,
}

/// Quantities shared by every event of one solar day.
struct SolarDay {
    lw: f64,
    phi: f64,
    dip: f64,
    n: f64,
    m: f64,
    l: f64,
    dec: f64,
    noon: f64,
}

impl SolarDay {
    fn new<T: CivilTime>(date: &T, observer: &Observer) -> Result<Self, CalculationError> {
        let lw = observer.lw();
        let d = to_days(date)?;
        let n = julian_cycle(d, lw);
        let ds = approx_transit(0.0, lw, n);
        let m = solar_mean_anomaly(ds);
        let l = ecliptic_longitude(m);
        Ok(Self {
            lw,
            phi: observer.phi(),
            dip: observer_angle(observer.height()),
            n,
            m,
            l,
            dec: declination(l, 0.0),
            noon: solar_transit_j(ds, m, l),
        })
    }

    /// Julian day at which the Sun sinks through `h` radians, if it does.
    fn set_j(&self, h: f64) -> Result<f64, Crossing> {
        let w = hour_angle(h, self.phi, self.dec).ok_or_else(|| {
            if hour_angle_cosine(h, self.phi, self.dec) < -1.0 {
                Crossing::AllDay
            } else {
                Crossing::AllNight
            }
        })?;
        let a = approx_transit(w, self.lw, self.n);
        Ok(solar_transit_j(a, self.m, self.l))
    }

    /// Crossing of `degrees` altitude, corrected for the horizon dip.
    fn crossing(&self, degrees: f64) -> Crossing {
        let h = (degrees + self.dip) * RAD;
        match self.set_j(h) {
            // rise and set are symmetric about the transit
            Ok(set) => Crossing::Occurs {
                rise: self.noon - (set - self.noon),
                set,
            },
            Err(polar) => polar,
        }
    }
}

/// Calculates sun phase times for the day of `date` at `observer`.
///
/// The observer's height lowers the horizon, moving every morning event
/// earlier and every evening event later. Thresholds the Sun does not
/// reach are left as `None`; the remaining events are still computed.
///
/// # Errors
///
/// [`CalculationError::TimeConversionError`] when `date` or a resulting time
/// is outside the supported range.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use suncalc::{get_times, format_date, Observer};
///
/// let date = NaiveDate::from_ymd_opt(2013, 3, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let times = get_times(&date, &Observer::new(50.5, 30.5).unwrap()).unwrap();
/// assert_eq!(format_date(&times.solar_noon), "2013-03-05 10:10:57");
/// assert!(times.sunrise.is_some());
/// ```
pub fn get_times<T: CivilTime>(date: &T, observer: &Observer) -> Result<SunTimes<T>, CalculationError> {
    let day = SolarDay::new(date, observer)?;
    let mut times = SunTimes::new(from_julian_day(day.noon)?, from_julian_day(day.noon - 0.5)?);

    for threshold in SUN_THRESHOLDS {
        match day.crossing(threshold.degrees) {
            Crossing::Occurs { rise, set } => {
                if let Some(slot) = times.slot(threshold.rise) {
                    *slot = Some(from_julian_day(rise)?);
                }
                if let Some(slot) = times.slot(threshold.set) {
                    *slot = Some(from_julian_day(set)?);
                }
            }
            Crossing::AllDay | Crossing::AllNight => {
                debug!(
                    "{}/{} omitted: sun does not cross {}° at latitude {}",
                    threshold.rise.name(),
                    threshold.set.name(),
                    threshold.degrees,
                    observer.latitude()
                );
            }
        }
    }
    Ok(times)
}

/// Sunrise for the day of `date`, or `None` during polar day or night.
pub fn get_sunrise<T: CivilTime>(date: &T, observer: &Observer) -> Result<Option<T>, CalculationError> {
    Ok(get_times(date, observer)?.sunrise)
}

/// Times at which the Sun's centre crosses `degrees` of altitude.
///
/// Generalizes the fixed thresholds of [`get_times`] to any altitude, e.g.
/// `-9.0` for a custom twilight, and tells polar day apart from polar night.
/// The observer's horizon dip is applied as in [`get_times`].
///
/// # Errors
///
/// [`CalculationError::AltitudeOutOfRange`] when `degrees` is outside
/// [-90, 90], and [`CalculationError::TimeConversionError`] as for
/// [`get_times`].
pub fn get_sun_event<T: CivilTime>(
    date: &T,
    observer: &Observer,
    degrees: f64,
) -> Result<SolarEventResult<T>, CalculationError> {
    if !(-90.0..=90.0).contains(&degrees) {
        return Err(CalculationError::AltitudeOutOfRange);
    }
    let day = SolarDay::new(date, observer)?;
    Ok(match day.crossing(degrees) {
        Crossing::Occurs { rise, set } => SolarEventResult::Occurs {
            rise: from_julian_day(rise)?,
            set: from_julian_day(set)?,
        },
        Crossing::AllDay => {
            debug!("sun stays above {degrees}° at latitude {}", observer.latitude());
            SolarEventResult::AllDay
        }
        Crossing::AllNight => {
            debug!("sun stays below {degrees}° at latitude {}", observer.latitude());
            SolarEventResult::AllNight
        }
    })
}

/// Position of the Sun at `date` as seen from `observer`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use suncalc::{get_position, Observer};
///
/// let date = NaiveDate::from_ymd_opt(2013, 3, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let position = get_position(&date, &Observer::new(50.5, 30.5).unwrap()).unwrap();
/// assert!((position.azimuth - -2.5003).abs() < 1e-3);
/// assert!((position.altitude - -0.7000).abs() < 1e-3);
/// ```
pub fn get_position<T: CivilTime>(date: &T, observer: &Observer) -> Result<SunPosition, CalculationError> {
    let phi = observer.phi();
    let d = to_days(date)?;
    let c = sun_coords(d);
    let h = sidereal_time(d, observer.lw()) - c.right_ascension;
    Ok(SunPosition {
        azimuth: azimuth(h, phi, c.declination),
        altitude: altitude(h, phi, c.declination),
    })
}
