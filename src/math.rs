use core::f64::consts::PI;

#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Degrees to radians
pub(crate) const RAD: f64 = PI / 180.0;

/// Obliquity of the Earth's axis (23.4397°) in radians
pub(crate) const OBLIQUITY: f64 = RAD * 23.4397;

/// Right ascension from ecliptic longitude `l` and latitude `b` (radians).
pub fn right_ascension(l: f64, b: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

/// Declination from ecliptic longitude `l` and latitude `b` (radians).
pub fn declination(l: f64, b: f64) -> f64 {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

/// Local sidereal time in radians.
///
/// # Arguments
///
/// * `d`  - Days since J2000.0
/// * `lw` - Observer longitude in radians, west positive
pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    RAD * (280.16 + 360.985_623_5 * d) - lw
}

/// Azimuth from hour angle `h`, observer latitude `phi` and declination
/// `dec`, measured from south towards west.
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Altitude above the horizon from hour angle `h`, observer latitude `phi`
/// and declination `dec`.
pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Parallactic angle of a body at hour angle `h`.
pub(crate) fn parallactic_angle(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(phi.tan() * dec.cos() - dec.sin() * h.cos())
}

/// Cosine of the hour angle at which a body of declination `dec` crosses
/// altitude `h` for an observer at latitude `phi`.
///
/// Values below -1 mean the body stays above `h` all day; values above 1
/// mean it never climbs to `h`.
pub(crate) fn hour_angle_cosine(h: f64, phi: f64, dec: f64) -> f64 {
    (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Hour angle at which a body of declination `dec` crosses altitude `h`.
///
/// Returns `None` when the body never reaches that altitude at this
/// latitude (polar day or night for the requested threshold).
pub fn hour_angle(h: f64, phi: f64, dec: f64) -> Option<f64> {
    let cosine = hour_angle_cosine(h, phi, dec);
    (-1.0..=1.0).contains(&cosine).then(|| cosine.acos())
}

/// Dip of the horizon, in degrees, for an observer `height` meters above
/// sea level. Zero at sea level, negative above it.
pub fn observer_angle(height: f64) -> f64 {
    -2.076 * height.sqrt() / 60.0
}
