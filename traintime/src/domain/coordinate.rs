//! Geographic coordinate type.

use std::fmt;

/// Error returned when a latitude or longitude is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// Both components are finite and within range, guaranteed at
/// construction.
///
/// # Examples
///
/// ```
/// use traintime::domain::Coordinate;
///
/// let sion = Coordinate::new(46.2312, 7.3577).unwrap();
/// assert_eq!(sion.to_string(), "46.2312,7.3577");
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Fallback position used when no coordinate is given: EPFL Valais/Sion (Alpole).
    pub const DEFAULT: Coordinate = Coordinate {
        lat: 46.2312,
        lon: 7.3577,
    };

    /// Human-readable name of [`Coordinate::DEFAULT`].
    pub const DEFAULT_NAME: &'static str = "EPFL Valais/Sion (Alpole)";

    /// Create a coordinate, validating both components.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidCoordinate {
                reason: "latitude and longitude must be finite",
            });
        }

        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate {
                reason: "latitude must be between -90 and 90",
            });
        }

        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinate {
                reason: "longitude must be between -180 and 180",
            });
        }

        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Formats as `lat,lon`, the form the completion endpoint expects.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}
