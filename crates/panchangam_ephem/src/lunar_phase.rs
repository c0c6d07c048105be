//! New moon search.
//!
//! Coarse scan + bisection on f(t) = normalize(moon(t) - sun(t)), wrapped
//! to [-180, +180] so that a zero crossing is a conjunction. The Moon
//! gains about 12 deg/day on the Sun, so a one-day step never straddles
//! two new moons.

use panchangam_base::normalize_to_pm180;

use crate::error::EphemerisError;
use crate::provider::EphemerisProvider;

/// Scan step in days.
const STEP_DAYS: f64 = 1.0;

/// Longest scan; more than one synodic month.
const MAX_SCAN_DAYS: f64 = 40.0;

/// Bisection stops below this bracket width (~0.9 s).
const CONVERGENCE_DAYS: f64 = 1.0e-5;

const MAX_ITERATIONS: usize = 60;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

fn elongation_signed<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_ut: f64,
) -> Result<f64, EphemerisError> {
    let lons = provider.longitudes(jd_ut)?;
    Ok(normalize_to_pm180(lons.moon_deg() - lons.sun_deg()))
}

/// A sign change that is a real crossing rather than the ±180 wrap at
/// full moon.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

fn bisect<P: EphemerisProvider + ?Sized>(
    provider: &P,
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
) -> Result<f64, EphemerisError> {
    for _ in 0..MAX_ITERATIONS {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = elongation_signed(provider, t_mid)?;
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
        if (t_b - t_a).abs() < CONVERGENCE_DAYS {
            break;
        }
    }
    Ok(0.5 * (t_a + t_b))
}

fn find_new_moon<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_start: f64,
    direction: Direction,
) -> Result<f64, EphemerisError> {
    let step = match direction {
        Direction::Forward => STEP_DAYS,
        Direction::Backward => -STEP_DAYS,
    };
    let max_steps = (MAX_SCAN_DAYS / STEP_DAYS).ceil() as usize;

    let mut t_prev = jd_start;
    let mut f_prev = elongation_signed(provider, t_prev)?;
    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = elongation_signed(provider, t_curr)?;

        if is_genuine_crossing(f_prev, f_curr) {
            let (t_a, f_a, t_b) = if t_prev < t_curr {
                (t_prev, f_prev, t_curr)
            } else {
                (t_curr, f_curr, t_prev)
            };
            return bisect(provider, t_a, f_a, t_b);
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Err(EphemerisError::NoConvergence("new moon scan"))
}

/// Most recent new moon at or before `jd_ut`.
pub fn previous_new_moon<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_ut: f64,
) -> Result<f64, EphemerisError> {
    find_new_moon(provider, jd_ut, Direction::Backward)
}

/// First new moon after `jd_ut`.
pub fn next_new_moon<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_ut: f64,
) -> Result<f64, EphemerisError> {
    find_new_moon(provider, jd_ut, Direction::Forward)
}
