use crate::types::CalculationError;

/// A validated observing location.
///
/// All inputs are checked when the observer is built, so the calculation
/// functions never see an out-of-range latitude or a negative height.
///
/// # Example
///
/// ```
/// use suncalc::Observer;
///
/// // Kyiv, 2 km above sea level
/// let observer = Observer::new(50.5, 30.5).unwrap().with_height(2000.0).unwrap();
/// assert_eq!(observer.height(), 2000.0);
///
/// assert!(Observer::new(91.0, 0.0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Observer {
    latitude: f64,
    longitude: f64,
    height: f64,
}

impl Observer {
    /// Creates an observer at sea level.
    ///
    /// # Arguments
    ///
    /// * `latitude` - Latitude in degrees (positive North, negative South)
    /// * `longitude` - Longitude in degrees (positive East, negative West)
    ///
    /// # Errors
    ///
    /// [`CalculationError::LatitudeOutOfRange`] or
    /// [`CalculationError::LongitudeOutOfRange`] when a coordinate is outside
    /// its range or not a number.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CalculationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CalculationError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CalculationError::LongitudeOutOfRange);
        }
        Ok(Self {
            latitude,
            longitude,
            height: 0.0,
        })
    }

    /// Returns a copy of the observer raised to `height` meters above sea level.
    ///
    /// # Errors
    ///
    /// [`CalculationError::HeightOutOfRange`] for negative or non-finite heights.
    pub fn with_height(self, height: f64) -> Result<Self, CalculationError> {
        if !height.is_finite() || height < 0.0 {
            return Err(CalculationError::HeightOutOfRange);
        }
        Ok(Self { height, ..self })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Height above sea level in meters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Latitude in radians (φ).
    pub(crate) fn phi(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Negated longitude in radians, the west-positive `lw` used by the
    /// sidereal time and transit formulas.
    pub(crate) fn lw(&self) -> f64 {
        (-self.longitude).to_radians()
    }
}
