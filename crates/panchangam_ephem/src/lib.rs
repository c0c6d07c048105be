//! Sun and Moon positions, rise/set times and new moons.
//!
//! This crate provides:
//! - The [`EphemerisProvider`] trait the panchang engine is written against
//! - [`AnalyticEphemeris`], a closed-form implementation (Meeus ch. 22, 25, 47)
//! - Iterative rise/set search for the Sun and Moon
//! - New moon search by scan + bisection on the Moon−Sun elongation

pub mod analytic;
pub mod error;
pub mod lunar;
pub mod lunar_phase;
pub mod provider;
pub mod riseset;
pub mod riseset_types;
pub mod solar;
pub mod types;

pub use analytic::AnalyticEphemeris;
pub use error::EphemerisError;
pub use lunar::{MEAN_DISTANCE_KM, MoonEcliptic, moon_apparent_longitude_deg, moon_ecliptic};
pub use lunar_phase::{SYNODIC_MONTH_DAYS, next_new_moon, previous_new_moon};
pub use provider::EphemerisProvider;
pub use riseset::{approximate_local_noon_jd, compute_rise_set, next_rise_set};
pub use riseset_types::{
    EARTH_EQUATORIAL_RADIUS_KM, GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult,
};
pub use solar::{
    AU_KM, ecliptic_to_equatorial, mean_obliquity_deg, nutation_deg, sun_apparent_longitude_deg,
    sun_distance_au, true_obliquity_deg,
};
pub use types::{Body, CelestialLongitudes, EquatorialPosition};
