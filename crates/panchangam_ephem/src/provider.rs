//! The ephemeris seam consumed by the panchang engine.

use crate::error::EphemerisError;
use crate::lunar_phase;
use crate::riseset_types::GeoLocation;
use crate::types::{Body, CelestialLongitudes};

/// Source of Sun/Moon longitudes and horizon events.
///
/// Implementations must be shareable across threads; the reverse date
/// search evaluates many days concurrently against one provider.
pub trait EphemerisProvider: Sync {
    /// Apparent tropical longitudes of the Sun and Moon at `jd_ut`.
    fn longitudes(&self, jd_ut: f64) -> Result<CelestialLongitudes, EphemerisError>;

    /// First rising of `body` at or after `jd_ut`.
    fn next_rising(
        &self,
        body: Body,
        location: &GeoLocation,
        jd_ut: f64,
    ) -> Result<f64, EphemerisError>;

    /// First setting of `body` at or after `jd_ut`.
    fn next_setting(
        &self,
        body: Body,
        location: &GeoLocation,
        jd_ut: f64,
    ) -> Result<f64, EphemerisError>;

    /// Most recent new moon at or before `jd_ut`.
    fn previous_new_moon(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        lunar_phase::previous_new_moon(self, jd_ut)
    }

    /// First new moon after `jd_ut`.
    fn next_new_moon(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        lunar_phase::next_new_moon(self, jd_ut)
    }
}
