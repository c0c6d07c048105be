//! Rise/set computation for the Sun and Moon.
//!
//! Iterative hour-angle method: locate the transit nearest an approximate
//! local noon, step out by the semi-diurnal arc at the target altitude,
//! then refine against the body's position at the trial instant. The
//! Moon uses its own hour-angle rate and a parallax-aware target altitude.

use std::f64::consts::{PI, TAU};

use log::trace;
use panchangam_time::{gmst_rad, jd_midnight, local_sidereal_time_rad};

use crate::error::EphemerisError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
use crate::types::{Body, EquatorialPosition};

/// Maximum iterations for the refinement loop.
const MAX_ITERATIONS: usize = 8;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Day offsets around the start day whose transits are examined by
/// [`next_rise_set`]. The previous day catches a moonset belonging to
/// the prior transit.
const SEARCH_DAY_OFFSETS: [f64; 4] = [-1.0, 0.0, 1.0, 2.0];

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

fn wrap_pm_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

fn hour_angle(jd_ut: f64, location: &GeoLocation, ra_rad: f64) -> f64 {
    let lst = local_sidereal_time_rad(gmst_rad(jd_ut), location.longitude_rad());
    wrap_pm_pi(lst - ra_rad)
}

/// Cosine of the hour angle at which the body reaches `h0_deg`.
fn cos_semi_arc(location: &GeoLocation, dec_rad: f64, h0_deg: f64) -> f64 {
    let phi = location.latitude_rad();
    (h0_deg.to_radians().sin() - phi.sin() * dec_rad.sin()) / (phi.cos() * dec_rad.cos())
}

/// Compute a single rise or set event around one transit.
///
/// # Arguments
/// * `position`: apparent equatorial position of `body` at a JD (UT)
/// * `location`: observer geographic location
/// * `event`: rising or setting
/// * `jd_ut_noon`: approximate local noon; the transit nearest this
///   instant anchors the event. See [`approximate_local_noon_jd`].
/// * `config`: refraction, semidiameter and altitude parameters
///
/// # Returns
/// * `RiseSetResult::Event` with the event time in JD UT
/// * `RiseSetResult::NeverRises` if the body stays below the horizon
/// * `RiseSetResult::NeverSets` if the body stays above the horizon
pub fn compute_rise_set<F>(
    position: F,
    body: Body,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, EphemerisError>
where
    F: Fn(f64) -> EquatorialPosition,
{
    let rate = body.hour_angle_rate_deg_per_day().to_radians(); // rad/day

    let noon = position(jd_ut_noon);
    let h0_deg = config.target_altitude_deg(body, noon.distance_km, location.altitude_m);
    let cos_h0 = cos_semi_arc(location, noon.dec_rad, h0_deg);
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    let jd_transit = jd_ut_noon - hour_angle(jd_ut_noon, location, noon.ra_rad) / rate;
    let semi_arc_days = cos_h0.acos() / rate;
    let mut jd_event = if event.is_rising() {
        jd_transit - semi_arc_days
    } else {
        jd_transit + semi_arc_days
    };

    let mut converged = false;
    for _ in 0..MAX_ITERATIONS {
        let pos = position(jd_event);
        let h0_deg_i = config.target_altitude_deg(body, pos.distance_km, location.altitude_m);
        let cos_h = cos_semi_arc(location, pos.dec_rad, h0_deg_i);
        if cos_h > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }

        let h_target = cos_h.acos();
        let ha_target = if event.is_rising() { -h_target } else { h_target };
        let ha_actual = hour_angle(jd_event, location, pos.ra_rad);

        let correction = wrap_pm_pi(ha_target - ha_actual) / rate;
        jd_event += correction;

        if correction.abs() < CONVERGENCE_DAYS {
            converged = true;
            break;
        }
    }

    if !converged {
        return Err(EphemerisError::NoConvergence("rise/set refinement"));
    }

    Ok(RiseSetResult::Event {
        jd_ut: jd_event,
        event,
    })
}

/// First rise or set of `body` at or after `jd_ut_start`.
///
/// Examines the transits around the start day and returns the earliest
/// event not before the start. When no candidate produces an event the
/// body is circumpolar for the whole window.
pub fn next_rise_set<F>(
    position: F,
    body: Body,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_start: f64,
    config: &RiseSetConfig,
) -> Result<f64, EphemerisError>
where
    F: Fn(f64) -> EquatorialPosition,
{
    location.validate()?;
    let day0 = jd_midnight(jd_ut_start);

    let mut best: Option<f64> = None;
    let mut never_rises = false;
    let mut never_sets = false;

    for offset in SEARCH_DAY_OFFSETS {
        let noon = approximate_local_noon_jd(day0 + offset, location.longitude_deg);
        match compute_rise_set(&position, body, location, event, noon, config)? {
            RiseSetResult::Event { jd_ut, .. } if jd_ut >= jd_ut_start => {
                best = Some(best.map_or(jd_ut, |b| b.min(jd_ut)));
            }
            RiseSetResult::Event { .. } => {}
            RiseSetResult::NeverRises => never_rises = true,
            RiseSetResult::NeverSets => never_sets = true,
        }
    }

    if let Some(jd) = best {
        trace!("{body} {event:?} after {jd_ut_start:.5}: {jd:.6}");
        return Ok(jd);
    }
    if never_sets {
        return Err(EphemerisError::AlwaysUp(body));
    }
    if never_rises {
        return Err(EphemerisError::AlwaysDown(body));
    }
    Err(EphemerisError::NoConvergence("no event after start"))
}
