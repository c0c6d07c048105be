//! Closed-form Sun/Moon ephemeris.
//!
//! Positions come from the truncated series in [`crate::solar`] and
//! [`crate::lunar`]. Time arguments are UT; the ~70 s offset to dynamical
//! time is below the resolution of either series and is not applied.

use panchangam_time::jd_to_centuries;

use crate::error::EphemerisError;
use crate::lunar::{moon_apparent_longitude_deg, moon_ecliptic};
use crate::provider::EphemerisProvider;
use crate::riseset::next_rise_set;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent};
use crate::solar::{
    AU_KM, ecliptic_to_equatorial, nutation_deg, sun_apparent_longitude_deg, sun_distance_au,
    true_obliquity_deg,
};
use crate::types::{Body, CelestialLongitudes, EquatorialPosition};

/// Analytic ephemeris with a rise/set configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticEphemeris {
    riseset: RiseSetConfig,
}

impl AnalyticEphemeris {
    pub fn new(riseset: RiseSetConfig) -> Self {
        Self { riseset }
    }

    pub fn riseset_config(&self) -> &RiseSetConfig {
        &self.riseset
    }

    /// Apparent geocentric equatorial position of `body` at `jd_ut`.
    pub fn equatorial(&self, body: Body, jd_ut: f64) -> EquatorialPosition {
        let t = jd_to_centuries(jd_ut);
        let obliquity = true_obliquity_deg(t);
        let (lon, lat, distance_km) = match body {
            Body::Sun => (
                sun_apparent_longitude_deg(t),
                0.0,
                sun_distance_au(t) * AU_KM,
            ),
            Body::Moon => {
                let m = moon_ecliptic(t);
                let (dpsi, _) = nutation_deg(t);
                (m.longitude_deg + dpsi, m.latitude_deg, m.distance_km)
            }
        };
        let (ra_rad, dec_rad) = ecliptic_to_equatorial(lon, lat, obliquity);
        EquatorialPosition {
            ra_rad,
            dec_rad,
            distance_km,
        }
    }

    fn next_event(
        &self,
        body: Body,
        location: &GeoLocation,
        event: RiseSetEvent,
        jd_ut: f64,
    ) -> Result<f64, EphemerisError> {
        next_rise_set(
            |jd| self.equatorial(body, jd),
            body,
            location,
            event,
            jd_ut,
            &self.riseset,
        )
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn longitudes(&self, jd_ut: f64) -> Result<CelestialLongitudes, EphemerisError> {
        if !jd_ut.is_finite() {
            return Err(EphemerisError::Time(panchangam_time::TimeError::OutOfRange(jd_ut)));
        }
        let t = jd_to_centuries(jd_ut);
        Ok(CelestialLongitudes::from_degrees(
            sun_apparent_longitude_deg(t),
            moon_apparent_longitude_deg(t),
        ))
    }

    fn next_rising(
        &self,
        body: Body,
        location: &GeoLocation,
        jd_ut: f64,
    ) -> Result<f64, EphemerisError> {
        self.next_event(body, location, RiseSetEvent::Rising, jd_ut)
    }

    fn next_setting(
        &self,
        body: Body,
        location: &GeoLocation,
        jd_ut: f64,
    ) -> Result<f64, EphemerisError> {
        self.next_event(body, location, RiseSetEvent::Setting, jd_ut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_instant_rejected() {
        let eph = AnalyticEphemeris::default();
        assert!(matches!(
            eph.longitudes(f64::NAN),
            Err(EphemerisError::Time(_))
        ));
    }

    #[test]
    fn sun_distance_in_km() {
        let eph = AnalyticEphemeris::default();
        let d = eph.equatorial(Body::Sun, 2_460_000.5).distance_km;
        assert!((1.47e8..1.53e8).contains(&d), "distance {d}");
    }

    #[test]
    fn sun_declination_within_obliquity() {
        let eph = AnalyticEphemeris::default();
        for k in 0..73 {
            let dec = eph.equatorial(Body::Sun, 2_460_000.5 + k as f64 * 5.0).dec_rad;
            assert!(dec.to_degrees().abs() < 23.5);
        }
    }
}
