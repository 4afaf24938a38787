use core::f64::consts::PI;

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{altitude, azimuth, declination, parallactic_angle, right_ascension, sidereal_time, RAD};
use crate::observer::Observer;
use crate::sun::sun_coords;
use crate::time::{to_days, CivilTime};
use crate::types::{CalculationError, EclipticCoords, EquatorialCoords, MoonIllumination, MoonPosition};

/// Mean distance from the Earth to the Sun in kilometers
const SUN_DISTANCE: f64 = 149_598_000.0;

/// Geocentric ecliptic coordinates of the Moon `d` days after J2000.0.
///
/// A low-order model: one dominant periodic term per coordinate, good to
/// a fraction of a degree.
pub fn moon_ecliptic_coords(d: f64) -> EclipticCoords {
    let l = RAD * (218.316 + 13.176_396 * d); // ecliptic longitude
    let m = RAD * (134.963 + 13.064_993 * d); // mean anomaly
    let f = RAD * (93.272 + 13.229_350 * d); // mean distance

    EclipticCoords {
        longitude: l + RAD * 6.289 * m.sin(),
        latitude: RAD * 5.128 * f.sin(),
        distance: 385_001.0 - 20_905.0 * m.cos(),
    }
}

/// Equatorial coordinates and distance (km) of the Moon `d` days after J2000.0.
pub(crate) fn moon_coords(d: f64) -> (EquatorialCoords, f64) {
    let ecliptic = moon_ecliptic_coords(d);
    let coords = EquatorialCoords {
        right_ascension: right_ascension(ecliptic.longitude, ecliptic.latitude),
        declination: declination(ecliptic.longitude, ecliptic.latitude),
    };
    (coords, ecliptic.distance)
}

/// Empirical refraction term added to the Moon's altitude `h`.
///
/// The expression has poles where the inner denominator vanishes; there the
/// term is not finite and no correction is applied.
pub(crate) fn refraction(h: f64) -> f64 {
    let correction = RAD * 0.017 / (h + RAD * 10.26 / (h + RAD * 5.10)).tan();
    if correction.is_finite() {
        correction
    } else {
        0.0
    }
}

/// Position of the Moon at `date` as seen from `observer`.
///
/// The altitude includes a refraction correction.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use suncalc::{get_moon_position, Observer};
///
/// let date = NaiveDate::from_ymd_opt(2013, 3, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let moon = get_moon_position(&date, &Observer::new(50.5, 30.5).unwrap()).unwrap();
/// assert!((moon.distance - 364_121.37).abs() < 0.01);
/// ```
pub fn get_moon_position<T: CivilTime>(date: &T, observer: &Observer) -> Result<MoonPosition, CalculationError> {
    let phi = observer.phi();
    let d = to_days(date)?;

    let (c, distance) = moon_coords(d);
    let h = sidereal_time(d, observer.lw()) - c.right_ascension;
    let alt = altitude(h, phi, c.declination);

    Ok(MoonPosition {
        azimuth: azimuth(h, phi, c.declination),
        altitude: alt + refraction(alt),
        distance,
        parallactic_angle: parallactic_angle(h, phi, c.declination),
    })
}

/// Illumination of the Moon at `date`.
///
/// Uses the geocentric positions of the Sun and Moon; the observer's
/// location does not matter.
pub fn get_moon_illumination<T: CivilTime>(date: &T) -> Result<MoonIllumination, CalculationError> {
    let d = to_days(date)?;
    let s = sun_coords(d);
    let (m, moon_distance) = moon_coords(d);

    let ra_delta = s.right_ascension - m.right_ascension;

    // geocentric elongation, clamped against rounding just past ±1
    let phi = (s.declination.sin() * m.declination.sin()
        + s.declination.cos() * m.declination.cos() * ra_delta.cos())
    .clamp(-1.0, 1.0)
    .acos();
    let inc = (SUN_DISTANCE * phi.sin()).atan2(moon_distance - SUN_DISTANCE * phi.cos());
    let angle = (s.declination.cos() * ra_delta.sin()).atan2(
        s.declination.sin() * m.declination.cos() - s.declination.cos() * m.declination.sin() * ra_delta.cos(),
    );
    let sign = if angle < 0.0 { -1.0 } else { 1.0 };

    Ok(MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: 0.5 + 0.5 * inc * sign / PI,
        angle,
    })
}
