//! # suncalc
//!
//! A small library for calculating sun position, sunlight phases (sunrise, sunset, dusk, golden hour…),
//! moon position, lunar phase and moon rise/set times for a given instant and location.
//!
//! The models are deliberately low-order: a handful of trigonometric evaluations per call, accurate to
//! about a minute for sun times and a fraction of a degree for positions. The crate is `no_std`
//! (it needs `alloc`), keeps no state between calls and every function is safe to call from any thread.
//!
//! All instants are UTC. Geographic inputs are in degrees, angular outputs are in radians, and azimuths
//! are measured from south towards west.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use suncalc::{format_date, get_moon_illumination, get_position, get_times, MoonTimes, Observer};
//!
//! // 2013-03-05 00:00:00 UTC
//! let date = NaiveDate::from_ymd_opt(2013, 3, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! // Kyiv, at sea level
//! let observer = Observer::new(50.5, 30.5).unwrap();
//!
//! // Sun position
//! let position = get_position(&date, &observer).unwrap();
//! println!("Altitude: {:.2}°", position.altitude.to_degrees());
//!
//! // Sun phases
//! let times = get_times(&date, &observer).unwrap();
//! if let Some(sunrise) = times.sunrise {
//!     println!("Sunrise: {}", format_date(&sunrise));
//! }
//! for (name, time) in times.to_formatted() {
//!     println!("{name}: {time}");
//! }
//!
//! // Moon
//! let illumination = get_moon_illumination(&date).unwrap();
//! println!("Illuminated: {:.1}%", illumination.fraction * 100.0);
//!
//! match suncalc::get_moon_times(&date, &observer).unwrap() {
//!     MoonTimes::Crossings { rise, set } => println!("Moonrise {rise:?}, moonset {set:?}"),
//!     MoonTimes::AlwaysUp => println!("Moon up all day"),
//!     MoonTimes::AlwaysDown => println!("Moon down all day"),
//! }
//! ```
#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod format;
mod math;
mod moon;
mod moon_times;
mod observer;
mod sun;
mod time;
mod types;


pub use format::{dates_near, format_date, pad, parse_date};
pub use math::{altitude, azimuth, declination, hour_angle, observer_angle, right_ascension, sidereal_time};
pub use moon::{get_moon_illumination, get_moon_position, moon_ecliptic_coords};
pub use moon_times::{get_moon_times, MoonTimes};
pub use observer::Observer;
pub use sun::{
    get_position, get_sun_event, get_sunrise, get_times, SolarEventResult, SunEvent, SunThreshold, SunTimes,
    SUN_THRESHOLDS,
};
pub use time::{from_julian_day, to_days, to_julian_day, CivilTime, MAX_YEAR, MIN_YEAR};
pub use types::{CalculationError, EclipticCoords, EquatorialCoords, MoonIllumination, MoonPosition, SunPosition};
