//! Panchang computation for a civil date.
//!
//! The day's elements are sampled at the configured reference instant
//! (00:30 UTC, 06:00 IST, by default). Sunrise, sunset and moonrise are searched from
//! the configured UTC anchor. A rise/set that cannot be resolved degrades
//! that field to the sentinel; failures of the angle-based stages are
//! returned to the caller.

use chrono::{Datelike, NaiveDate};
use log::{debug, warn};
use panchangam_base::{
    KaalaInterval, KaranaPosition, NakshatraInfo, TithiPosition, YogaPosition,
    ayana_from_sidereal_longitude, festival_for_tithi, kaala_intervals, karana_from_tithi_float,
    nakshatra_from_longitude, ritu_from_masa, samvatsara_for, tithi_from_elongation,
    vaar_from_weekday, yoga_from_longitudes,
};
use panchangam_ephem::{AnalyticEphemeris, Body, EphemerisError, EphemerisProvider};
use panchangam_time::{format_clock_12h, local_to_jd, parse_civil_date};

use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::masa::masa_for_instant;
use crate::panchang_types::{
    Attributes, Inauspicious, MasaInfo, PanchangSnapshot, SunCycle, sanskrit_description,
};

/// Angle classifications at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementsAt {
    /// Sun's sidereal longitude in degrees.
    pub sun_sidereal_deg: f64,
    /// Moon's sidereal longitude in degrees.
    pub moon_sidereal_deg: f64,
    pub tithi: TithiPosition,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaPosition,
    pub karana: KaranaPosition,
}

/// Rise/set instants (JD UT) for a date; `None` where circumpolar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunMoonTimes {
    pub sunrise: Option<f64>,
    pub sunset: Option<f64>,
    pub moonrise: Option<f64>,
}

/// Panchang calculator bound to an ephemeris provider and configuration.
#[derive(Debug, Clone)]
pub struct PanchangEngine<P> {
    provider: P,
    config: PanchangConfig,
}

impl PanchangEngine<AnalyticEphemeris> {
    /// Engine over the built-in analytic ephemeris.
    pub fn analytic(config: PanchangConfig) -> Result<Self, SearchError> {
        let provider = AnalyticEphemeris::new(config.riseset);
        Self::new(provider, config)
    }
}

impl<P: EphemerisProvider> PanchangEngine<P> {
    /// Create an engine after validating `config`.
    pub fn new(provider: P, config: PanchangConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &PanchangConfig {
        &self.config
    }

    /// JD (UT) at which the elements of `date` are sampled.
    pub fn reference_jd(&self, date: NaiveDate) -> Result<f64, SearchError> {
        Ok(local_to_jd(
            date,
            self.config.reference_time,
            self.config.reference_offset_minutes,
        )?)
    }

    /// Tithi, nakshatra, yoga and karana at `jd_ut`.
    pub fn elements_at(&self, jd_ut: f64) -> Result<ElementsAt, SearchError> {
        let lons = self.provider.longitudes(jd_ut)?;
        let aya = self.config.ayanamsha;
        let sun = aya.sidereal_from_rad(lons.sun_tropical_rad);
        let moon = aya.sidereal_from_rad(lons.moon_tropical_rad);

        let tithi = tithi_from_elongation(moon - sun);
        Ok(ElementsAt {
            sun_sidereal_deg: sun,
            moon_sidereal_deg: moon,
            tithi,
            nakshatra: nakshatra_from_longitude(moon),
            yoga: yoga_from_longitudes(sun, moon),
            karana: karana_from_tithi_float(tithi.tithi_float),
        })
    }

    /// Masa for the reference instant of `date`.
    pub fn masa_for_date(&self, date: NaiveDate) -> Result<MasaInfo, SearchError> {
        let jd = self.reference_jd(date)?;
        masa_for_instant(&self.provider, self.config.ayanamsha, jd)
    }

    /// Sunrise, sunset and moonrise for `date`.
    ///
    /// Sunset is the first setting after sunrise when sunrise is known,
    /// so the daytime span is never negative.
    pub fn sun_moon_times(&self, date: NaiveDate) -> Result<SunMoonTimes, SearchError> {
        let anchor = local_to_jd(date, self.config.riseset_anchor_utc, 0)?;
        let loc = &self.config.location;

        let sunrise = resolve_or_degrade(
            self.provider.next_rising(Body::Sun, loc, anchor),
            "sunrise",
            date,
        );
        let sunset = resolve_or_degrade(
            self.provider.next_setting(Body::Sun, loc, sunrise.unwrap_or(anchor)),
            "sunset",
            date,
        );
        let moonrise = resolve_or_degrade(
            self.provider.next_rising(Body::Moon, loc, anchor),
            "moonrise",
            date,
        );

        Ok(SunMoonTimes {
            sunrise,
            sunset,
            moonrise,
        })
    }

    /// Full panchang for `date`.
    pub fn calculate(&self, date: NaiveDate) -> Result<PanchangSnapshot, SearchError> {
        let jd_ref = self.reference_jd(date)?;
        let el = self.elements_at(jd_ref)?;
        debug!(
            "{date}: sun {:.4} moon {:.4} (sidereal) tithi {} nakshatra {}",
            el.sun_sidereal_deg, el.moon_sidereal_deg, el.tithi.tithi, el.nakshatra.nakshatra
        );

        let masa = masa_for_instant(&self.provider, self.config.ayanamsha, jd_ref)?;
        let weekday = date.weekday().num_days_from_monday();

        let attributes = Attributes {
            samvatsara: samvatsara_for(date.year(), date.month(), masa.masa),
            ayana: ayana_from_sidereal_longitude(el.sun_sidereal_deg),
            ritu: ritu_from_masa(masa.masa),
            maasa: masa.masa,
            is_adhika: masa.adhika,
            paksha: el.tithi.paksha,
            tithi: el.tithi.tithi,
            nakshatra: el.nakshatra.nakshatra,
            yoga: el.yoga.yoga,
            karana: el.karana.karana,
            vasara: vaar_from_weekday(weekday),
        };

        let times = self.sun_moon_times(date)?;
        let sun_cycle = SunCycle {
            sunrise: self.clock_or_sentinel(times.sunrise)?,
            sunset: self.clock_or_sentinel(times.sunset)?,
            moonrise: self.clock_or_sentinel(times.moonrise)?,
        };

        let inauspicious = match (times.sunrise, times.sunset) {
            (Some(rise), Some(set)) => {
                let pair = kaala_intervals(rise, set, weekday);
                Inauspicious {
                    rahu: self.interval_text(&pair.rahu)?,
                    yama: self.interval_text(&pair.yama)?,
                }
            }
            _ => Inauspicious {
                rahu: self.config.sentinel.to_string(),
                yama: self.config.sentinel.to_string(),
            },
        };

        Ok(PanchangSnapshot {
            date,
            sun_cycle,
            festival: festival_for_tithi(attributes.tithi),
            description: sanskrit_description(&attributes),
            attributes,
            inauspicious,
        })
    }

    /// Like [`calculate`](Self::calculate), parsing `YYYY-MM-DD` or `DD-MM-YYYY`.
    pub fn calculate_str(&self, date: &str) -> Result<PanchangSnapshot, SearchError> {
        self.calculate(parse_civil_date(date)?)
    }

    fn clock_or_sentinel(&self, jd: Option<f64>) -> Result<String, SearchError> {
        match jd {
            Some(jd) => Ok(format_clock_12h(jd, self.config.utc_offset_minutes)?),
            None => Ok(self.config.sentinel.to_string()),
        }
    }

    fn interval_text(&self, iv: &KaalaInterval) -> Result<String, SearchError> {
        let offset = self.config.utc_offset_minutes;
        Ok(format!(
            "{} - {}",
            format_clock_12h(iv.start_jd, offset)?,
            format_clock_12h(iv.end_jd, offset)?
        ))
    }
}

/// A rise/set that cannot be resolved becomes `None`. Circumpolar bodies
/// and a refinement that fails to settle (a body skimming the horizon)
/// are treated alike; none of the angle-based fields depend on them.
fn resolve_or_degrade(result: Result<f64, EphemerisError>, what: &str, date: NaiveDate) -> Option<f64> {
    match result {
        Ok(jd) => Some(jd),
        Err(e) if e.is_circumpolar() => {
            warn!("{what} unavailable on {date}: {e}");
            None
        }
        Err(e) => {
            warn!("{what} could not be resolved on {date}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn circumpolar_becomes_none() {
        let err = EphemerisError::AlwaysUp(Body::Sun);
        assert_eq!(resolve_or_degrade(Err(err), "sunrise", ymd(2024, 6, 21)), None);
    }

    #[test]
    fn unsettled_refinement_becomes_none() {
        let err = EphemerisError::NoConvergence("rise/set refinement");
        assert_eq!(resolve_or_degrade(Err(err), "moonrise", ymd(2025, 3, 22)), None);
    }

    #[test]
    fn resolved_time_passes_through() {
        assert_eq!(resolve_or_degrade(Ok(2_460_000.5), "sunset", ymd(2024, 6, 21)), Some(2_460_000.5));
    }

    #[test]
    fn reference_instant_is_half_past_midnight_utc() {
        let engine = PanchangEngine::analytic(PanchangConfig::default()).unwrap();
        let date = ymd(2024, 1, 15);
        let jd = engine.reference_jd(date).unwrap();
        // 2024-01-15 00:30 UTC = 06:00 IST
        let expected = panchangam_time::utc_midnight_jd(date) + 0.5 / 24.0;
        assert!((jd - expected).abs() < 1e-9);
        assert_eq!(
            panchangam_time::format_clock_12h(jd, panchangam_time::IST_OFFSET_MINUTES).unwrap(),
            "06:00 AM"
        );
    }

    #[test]
    fn reference_instant_follows_configured_offset() {
        let cfg = PanchangConfig {
            reference_offset_minutes: panchangam_time::IST_OFFSET_MINUTES,
            ..PanchangConfig::default()
        };
        let engine = PanchangEngine::analytic(cfg).unwrap();
        let jd = engine.reference_jd(ymd(2024, 1, 15)).unwrap();
        // 00:30 IST is 19:00 UTC the previous evening
        let expected = panchangam_time::utc_midnight_jd(ymd(2024, 1, 14)) + 19.0 / 24.0;
        assert!((jd - expected).abs() < 1e-9);
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let cfg = PanchangConfig {
            search_window_days: 0,
            ..PanchangConfig::default()
        };
        assert!(PanchangEngine::analytic(cfg).is_err());
    }
}
