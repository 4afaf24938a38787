use thiserror::Error;

/// Errors raised at the boundary of the calculator.
///
/// Unreachable sun thresholds and degenerate lunar-search windows are not
/// errors: they show up as missing events in the results instead.
///
/// # Variants
///
/// - `LatitudeOutOfRange`: latitude must be in range [-90, 90] degrees
/// - `LongitudeOutOfRange`: longitude must be in range [-180, 180] degrees
/// - `HeightOutOfRange`: observer height must be a finite value >= 0 meters
/// - `AltitudeOutOfRange`: sun altitude thresholds must be in range [-90, 90] degrees
/// - `TimeConversionError`: instant outside the supported years or not representable
/// - `InvalidDateFormat`: text is not a `YYYY-MM-DD HH:MM:SS` timestamp
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    /// Latitude out of valid range [-90, 90] degrees
    #[error("Latitude out of range")]
    LatitudeOutOfRange,

    /// Longitude out of valid range [-180, 180] degrees
    #[error("Longitude out of range")]
    LongitudeOutOfRange,

    /// Height negative or not finite
    #[error("Height out of range")]
    HeightOutOfRange,

    /// Sun altitude threshold out of valid range [-90, 90] degrees
    #[error("Altitude out of range")]
    AltitudeOutOfRange,

    /// Error converting between time representations
    #[error("Time conversion error")]
    TimeConversionError,

    /// Text could not be parsed as a timestamp
    #[error("Invalid date format")]
    InvalidDateFormat,
}

/// Equatorial coordinates of a body, in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialCoords {
    /// Right ascension in radians
    pub right_ascension: f64,
    /// Declination in radians
    pub declination: f64,
}

/// Geocentric ecliptic coordinates of the Moon.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EclipticCoords {
    /// Ecliptic longitude in radians
    pub longitude: f64,
    /// Ecliptic latitude in radians
    pub latitude: f64,
    /// Distance from the Earth's centre in kilometers
    pub distance: f64,
}

/// Position of the Sun in local horizontal coordinates.
///
/// # Fields
///
/// - `azimuth`: radians, measured from south towards west (0 = S, π/2 = W, -π/2 = E)
/// - `altitude`: radians above the horizon (negative below)
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    /// Azimuth in radians, from south towards west
    pub azimuth: f64,
    /// Altitude above the horizon in radians
    pub altitude: f64,
}

/// Position of the Moon in local horizontal coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonPosition {
    /// Azimuth in radians, from south towards west
    pub azimuth: f64,
    /// Altitude above the horizon in radians, refraction included
    pub altitude: f64,
    /// Distance from the Earth's centre in kilometers
    pub distance: f64,
    /// Parallactic angle in radians
    pub parallactic_angle: f64,
}

/// Illumination of the Moon's disk.
///
/// `phase` runs from 0 (new moon) through 0.25 (first quarter), 0.5 (full
/// moon) and 0.75 (last quarter) back to 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonIllumination {
    /// Illuminated fraction of the disk, in [0, 1]
    pub fraction: f64,
    /// Phase in [0, 1]
    pub phase: f64,
    /// Midpoint angle of the illuminated limb in radians, eastward from north
    pub angle: f64,
}
