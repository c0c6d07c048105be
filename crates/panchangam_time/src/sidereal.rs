//! Greenwich and local mean sidereal time.
//!
//! Uses the IAU 1982 expression in the form given by Meeus (eq. 12.4),
//! evaluated directly at any instant. UT is taken as UTC; the sub-second
//! UT1-UTC difference is below the precision this engine needs.

use std::f64::consts::TAU;

use crate::julian::{J2000_JD, jd_to_centuries};

/// Mean sidereal rotation of the Earth, degrees per solar day.
pub const SIDEREAL_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Greenwich Mean Sidereal Time in degrees, in [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let theta = 280.460_618_37 + SIDEREAL_DEG_PER_DAY * (jd_ut - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Greenwich Mean Sidereal Time in radians, in [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    gmst_deg(jd_ut).to_radians().rem_euclid(TAU)
}

/// Local sidereal time from GMST and east longitude, both in radians.
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
