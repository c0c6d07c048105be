//! Rahukala and Yamaganda intervals.
//!
//! Daytime (sunrise to sunset) is split into eight equal octants. Each
//! weekday assigns one octant to Rahu and one to Yama.

/// Rahukala octant by weekday, Monday first.
pub const RAHU_OCTANTS: [u8; 7] = [1, 6, 4, 5, 3, 2, 7];

/// Yamaganda octant by weekday, Monday first.
pub const YAMA_OCTANTS: [u8; 7] = [4, 3, 2, 1, 0, 6, 5];

/// An interval of the day, as Julian Dates (UT).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaalaInterval {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl KaalaInterval {
    /// Length in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// Both inauspicious intervals of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaalaPair {
    pub rahu: KaalaInterval,
    pub yama: KaalaInterval,
}

fn octant_interval(sunrise_jd: f64, sunset_jd: f64, octant: u8) -> KaalaInterval {
    let span = (sunset_jd - sunrise_jd) / 8.0;
    let start_jd = sunrise_jd + span * octant as f64;
    KaalaInterval {
        start_jd,
        end_jd: start_jd + span,
    }
}

/// Rahukala for a day; `days_from_monday` is reduced modulo 7.
pub fn rahu_kala(sunrise_jd: f64, sunset_jd: f64, days_from_monday: u32) -> KaalaInterval {
    let octant = RAHU_OCTANTS[(days_from_monday % 7) as usize];
    octant_interval(sunrise_jd, sunset_jd, octant)
}

/// Yamaganda for a day; `days_from_monday` is reduced modulo 7.
pub fn yamaganda(sunrise_jd: f64, sunset_jd: f64, days_from_monday: u32) -> KaalaInterval {
    let octant = YAMA_OCTANTS[(days_from_monday % 7) as usize];
    octant_interval(sunrise_jd, sunset_jd, octant)
}

/// Rahukala and Yamaganda together.
pub fn kaala_intervals(sunrise_jd: f64, sunset_jd: f64, days_from_monday: u32) -> KaalaPair {
    KaalaPair {
        rahu: rahu_kala(sunrise_jd, sunset_jd, days_from_monday),
        yama: yamaganda(sunrise_jd, sunset_jd, days_from_monday),
    }
}
