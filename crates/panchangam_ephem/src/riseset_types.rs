//! Types for sunrise/sunset and moonrise/moonset calculations.
//!
//! Provides geographic location, event types, configuration, and result
//! types used by the rise/set module.

use std::f64::consts::PI;

use crate::error::EphemerisError;
use crate::types::Body;

/// Mean Earth radius in meters (for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Equatorial Earth radius in km (for lunar horizontal parallax).
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Check ranges and finiteness.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(EphemerisError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(EphemerisError::InvalidLocation("longitude outside [-180, 180]"));
        }
        if !self.altitude_m.is_finite() {
            return Err(EphemerisError::InvalidLocation("altitude is not finite"));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Horizon crossing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb appears above the horizon.
    Rising,
    /// Upper limb disappears below the horizon.
    Setting,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Rising)
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Geometric dip of the horizon in degrees.
    pub fn dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt() * (180.0 / PI)
        } else {
            0.0
        }
    }

    /// Total horizon depression for sunrise/sunset in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0 + self.dip_deg(altitude_m)
    }

    /// Geocentric altitude of the body's center at the instant of rise or set.
    ///
    /// For the Moon, horizontal parallax dominates and raises the target
    /// above the horizon: `h0 = 0.7275 * parallax - refraction - dip`,
    /// where 0.7275 folds in the lunar semidiameter.
    pub fn target_altitude_deg(&self, body: Body, distance_km: f64, altitude_m: f64) -> f64 {
        match body {
            Body::Sun => -self.horizon_depression_deg(altitude_m),
            Body::Moon => {
                let parallax_deg = (EARTH_EQUATORIAL_RADIUS_KM / distance_km).asin().to_degrees();
                0.7275 * parallax_deg - self.refraction_arcmin / 60.0 - self.dip_deg(altitude_m)
            }
        }
    }
}

/// Result of a single-transit rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Date (UT).
    Event { jd_ut: f64, event: RiseSetEvent },
    /// Body stays below the horizon around this transit.
    NeverRises,
    /// Body stays above the horizon around this transit.
    NeverSets,
}
