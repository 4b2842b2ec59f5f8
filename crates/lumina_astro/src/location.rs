//! Geographic observer location.

use crate::error::AstroError;

/// Geographic location in degrees, east longitude positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, [-180, 180], east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Check coordinate ranges.
    pub fn validate(&self) -> Result<(), AstroError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(AstroError::InvalidLocation(
                "latitude must be in [-90, 90] degrees",
            ));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(AstroError::InvalidLocation(
                "longitude must be in [-180, 180] degrees",
            ));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
