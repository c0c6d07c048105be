//! Low-precision solar position, nutation and obliquity.
//!
//! Meeus, "Astronomical Algorithms", ch. 22 and 25. Solar longitude is
//! good to about 0.01 deg over several centuries around J2000.
//! All functions take Julian centuries `t` from J2000.0.

use std::f64::consts::PI;

const DEG: f64 = PI / 180.0;

/// Astronomical unit in km.
pub const AU_KM: f64 = 149_597_870.7;

fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Longitude of the Moon's mean ascending node, degrees.
pub fn lunar_node_longitude_deg(t: f64) -> f64 {
    normalize_degrees(125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0)
}

fn sun_mean_longitude(t: f64) -> f64 {
    normalize_degrees(280.46646 + t * (36000.76983 + t * 0.0003032))
}

fn sun_mean_anomaly(t: f64) -> f64 {
    normalize_degrees(357.52911 + t * (35999.05029 - t * 0.0001537))
}

fn earth_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + t * 0.0000001267)
}

fn sun_equation_of_center(t: f64) -> f64 {
    let m = sun_mean_anomaly(t) * DEG;
    m.sin() * (1.914602 - t * (0.004817 + t * 0.000014))
        + (2.0 * m).sin() * (0.019993 - t * 0.000101)
        + (3.0 * m).sin() * 0.000289
}

/// Sun's geometric longitude referred to the mean equinox of date, degrees.
pub fn sun_true_longitude_deg(t: f64) -> f64 {
    normalize_degrees(sun_mean_longitude(t) + sun_equation_of_center(t))
}

/// Sun's apparent longitude (nutation and aberration applied), degrees.
pub fn sun_apparent_longitude_deg(t: f64) -> f64 {
    let omega = 125.04 - 1934.136 * t;
    normalize_degrees(sun_true_longitude_deg(t) - 0.00569 - 0.00478 * (omega * DEG).sin())
}

/// Earth-Sun distance in AU.
pub fn sun_distance_au(t: f64) -> f64 {
    let e = earth_eccentricity(t);
    let v = (sun_mean_anomaly(t) + sun_equation_of_center(t)) * DEG;
    1.000_001_018 * (1.0 - e * e) / (1.0 + e * v.cos())
}

/// Mean obliquity of the ecliptic (IAU 1980), degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.0 + (26.0 + (21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0
}

/// Nutation in longitude and obliquity, degrees, from the four largest terms.
pub fn nutation_deg(t: f64) -> (f64, f64) {
    let omega = lunar_node_longitude_deg(t) * DEG;
    let l_sun = (280.4665 + 36000.7698 * t) * DEG;
    let l_moon = (218.3165 + 481267.8813 * t) * DEG;

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();
    (dpsi / 3600.0, deps / 3600.0)
}

/// True obliquity (mean plus nutation), degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation_deg(t).1
}

/// Convert ecliptic longitude/latitude (degrees) to right ascension and
/// declination (radians) for the given obliquity (degrees).
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let lon = lon_deg * DEG;
    let lat = lat_deg * DEG;
    let eps = obliquity_deg * DEG;

    let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos());
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin()).asin();
    (ra.rem_euclid(2.0 * PI), dec)
}
