//! Geocentric lunar position from the principal periodic terms.
//!
//! Meeus, "Astronomical Algorithms", ch. 47, truncated to the twenty
//! largest terms of tables 47.A and 47.B. Longitude is good to roughly
//! 0.05 deg, well inside a single Karana (6 deg).

use std::f64::consts::PI;

const DEG: f64 = PI / 180.0;

/// Mean Earth-Moon distance in km, the constant term of the distance series.
pub const MEAN_DISTANCE_KM: f64 = 385_000.56;

// (D, M, M', F, Σl in 1e-6 deg, Σr in 1e-3 km)
const TERMS_LR: [(f64, f64, f64, f64, f64, f64); 20] = [
    (0.0, 0.0, 1.0, 0.0, 6_288_774.0, -20_905_355.0),
    (2.0, 0.0, -1.0, 0.0, 1_274_027.0, -3_699_111.0),
    (2.0, 0.0, 0.0, 0.0, 658_314.0, -2_955_968.0),
    (0.0, 0.0, 2.0, 0.0, 213_618.0, -569_925.0),
    (0.0, 1.0, 0.0, 0.0, -185_116.0, 48_888.0),
    (0.0, 0.0, 0.0, 2.0, -114_332.0, -3_149.0),
    (2.0, 0.0, -2.0, 0.0, 58_793.0, 246_158.0),
    (2.0, -1.0, -1.0, 0.0, 57_066.0, -152_138.0),
    (2.0, 0.0, 1.0, 0.0, 53_322.0, -170_733.0),
    (2.0, -1.0, 0.0, 0.0, 45_758.0, -204_586.0),
    (0.0, 1.0, -1.0, 0.0, -40_923.0, -129_620.0),
    (1.0, 0.0, 0.0, 0.0, -34_720.0, 108_743.0),
    (0.0, 1.0, 1.0, 0.0, -30_383.0, 104_755.0),
    (2.0, 0.0, 0.0, -2.0, 15_327.0, 10_321.0),
    (0.0, 0.0, 1.0, 2.0, -12_528.0, 0.0),
    (0.0, 0.0, 1.0, -2.0, 10_980.0, 79_661.0),
    (4.0, 0.0, -1.0, 0.0, 10_675.0, -34_782.0),
    (0.0, 0.0, 3.0, 0.0, 10_034.0, -23_210.0),
    (4.0, 0.0, -2.0, 0.0, 8_548.0, -21_636.0),
    (2.0, 1.0, -1.0, 0.0, -7_888.0, 24_208.0),
];

// (D, M, M', F, Σb in 1e-6 deg)
const TERMS_B: [(f64, f64, f64, f64, f64); 20] = [
    (0.0, 0.0, 0.0, 1.0, 5_128_122.0),
    (0.0, 0.0, 1.0, 1.0, 280_602.0),
    (0.0, 0.0, 1.0, -1.0, 277_693.0),
    (2.0, 0.0, 0.0, -1.0, 173_237.0),
    (2.0, 0.0, -1.0, 1.0, 55_413.0),
    (2.0, 0.0, -1.0, -1.0, 46_271.0),
    (2.0, 0.0, 0.0, 1.0, 32_573.0),
    (0.0, 0.0, 2.0, 1.0, 17_198.0),
    (2.0, 0.0, 1.0, -1.0, 9_266.0),
    (0.0, 0.0, 2.0, -1.0, 8_822.0),
    (2.0, -1.0, 0.0, -1.0, 8_216.0),
    (2.0, 0.0, -2.0, -1.0, 4_324.0),
    (2.0, 0.0, 1.0, 1.0, 4_200.0),
    (2.0, 1.0, 0.0, -1.0, -3_359.0),
    (2.0, -1.0, -1.0, 1.0, 2_463.0),
    (2.0, -1.0, 0.0, 1.0, 2_211.0),
    (2.0, -1.0, -1.0, -1.0, 2_065.0),
    (0.0, 1.0, -1.0, -1.0, -1_870.0),
    (4.0, 0.0, -1.0, -1.0, 1_828.0),
    (0.0, 1.0, 0.0, 1.0, -1_794.0),
];

/// Geometric ecliptic coordinates of the Moon, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonEcliptic {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_km: f64,
}

/// Fundamental arguments (L', D, M, M', F) in degrees.
fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    [
        218.3164477 + 481_267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0 - t4 / 65_194_000.0,
        297.8501921 + 445_267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0 - t4 / 113_065_000.0,
        357.5291092 + 35_999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0,
        134.9633964 + 477_198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0 - t4 / 14_712_000.0,
        93.2720950 + 483_202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0 + t4 / 863_310_000.0,
    ]
    .map(|a| a.rem_euclid(360.0))
}

fn eccentricity_factor(m_coeff: f64, e: f64) -> f64 {
    match m_coeff.abs() as i32 {
        1 => e,
        2 => e * e,
        _ => 1.0,
    }
}

/// Moon's geometric position for Julian centuries `t` from J2000.0.
pub fn moon_ecliptic(t: f64) -> MoonEcliptic {
    let [lp, d, m, mp, f] = fundamental_arguments(t);
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(cd, cm, cmp, cf, cl, cr) in &TERMS_LR {
        let arg = (cd * d + cm * m + cmp * mp + cf * f) * DEG;
        let ef = eccentricity_factor(cm, e);
        sum_l += cl * ef * arg.sin();
        sum_r += cr * ef * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(cd, cm, cmp, cf, cb) in &TERMS_B {
        let arg = (cd * d + cm * m + cmp * mp + cf * f) * DEG;
        sum_b += cb * eccentricity_factor(cm, e) * arg.sin();
    }

    // Venus, Jupiter and flattening terms
    let a1 = (119.75 + 131.849 * t) * DEG;
    let a2 = (53.09 + 479_264.290 * t) * DEG;
    let a3 = (313.45 + 481_266.484 * t) * DEG;
    let lp_r = lp * DEG;
    let mp_r = mp * DEG;
    let f_r = f * DEG;

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp_r - f_r).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp_r.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f_r).sin()
        + 175.0 * (a1 + f_r).sin()
        + 127.0 * (lp_r - mp_r).sin()
        - 115.0 * (lp_r + mp_r).sin();

    MoonEcliptic {
        longitude_deg: (lp + sum_l / 1_000_000.0).rem_euclid(360.0),
        latitude_deg: sum_b / 1_000_000.0,
        distance_km: MEAN_DISTANCE_KM + sum_r / 1000.0,
    }
}

/// Moon's apparent longitude (nutation in longitude applied), degrees.
pub fn moon_apparent_longitude_deg(t: f64) -> f64 {
    let (dpsi, _) = crate::solar::nutation_deg(t);
    (moon_ecliptic(t).longitude_deg + dpsi).rem_euclid(360.0)
}
