//! Engine configuration.
//!
//! `Default` is the fixed observer the calendar is published for:
//! Bangalore, times printed in IST, elements sampled at 00:30 UTC,
//! ayanamsha 24.14 deg.

use chrono::NaiveTime;
use panchangam_base::Ayanamsha;
use panchangam_ephem::{GeoLocation, RiseSetConfig};
use panchangam_time::{IST_OFFSET_MINUTES, fixed_offset};

use crate::error::SearchError;

/// Bangalore: 12.9716 N, 77.5946 E, 920 m.
pub const BANGALORE: GeoLocation = GeoLocation {
    latitude_deg: 12.9716,
    longitude_deg: 77.5946,
    altitude_m: 920.0,
};

/// Text shown in place of a time that could not be resolved.
pub const UNAVAILABLE: &str = "-";

/// Days scanned by the reverse date search.
pub const DEFAULT_SEARCH_WINDOW_DAYS: u32 = 380;

/// Days covered by the attendance forecast.
pub const DEFAULT_FORECAST_DAYS: u32 = 7;

/// Policy constants of the panchang engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangConfig {
    /// Observer for rise/set times.
    pub location: GeoLocation,
    /// Tropical → sidereal offset.
    pub ayanamsha: Ayanamsha,
    /// Offset used to print times, minutes east of UTC.
    pub utc_offset_minutes: i32,
    /// Wall-clock instant at which the day's elements are sampled.
    ///
    /// With the default offset this is 00:30 UTC, 06:00 IST, shortly after
    /// sunrise at the observer. It is a convention, not an astronomical
    /// boundary; a tithi that changes shortly after it is reported for the
    /// following date.
    pub reference_time: NaiveTime,
    /// Offset of `reference_time`, minutes east of UTC. Zero by default:
    /// `reference_time` is a UTC clock reading.
    pub reference_offset_minutes: i32,
    /// UTC time of day from which rise/set searches start.
    pub riseset_anchor_utc: NaiveTime,
    /// Refraction and dip parameters for rise/set.
    pub riseset: RiseSetConfig,
    /// Consecutive days scanned by the reverse search.
    pub search_window_days: u32,
    /// Sentinel for unresolved times and intervals.
    pub sentinel: &'static str,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            location: BANGALORE,
            ayanamsha: Ayanamsha::default(),
            utc_offset_minutes: IST_OFFSET_MINUTES,
            reference_time: NaiveTime::from_hms_opt(0, 30, 0).unwrap_or(NaiveTime::MIN),
            reference_offset_minutes: 0,
            riseset_anchor_utc: NaiveTime::MIN,
            riseset: RiseSetConfig::default(),
            search_window_days: DEFAULT_SEARCH_WINDOW_DAYS,
            sentinel: UNAVAILABLE,
        }
    }
}

impl PanchangConfig {
    /// Check observer, offsets and window.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.location.validate()?;
        fixed_offset(self.utc_offset_minutes)?;
        fixed_offset(self.reference_offset_minutes)?;
        if self.search_window_days == 0 {
            return Err(SearchError::InvalidConfig("search_window_days must be positive"));
        }
        if !self.ayanamsha.degrees().is_finite() {
            return Err(SearchError::InvalidConfig("ayanamsha must be finite"));
        }
        Ok(())
    }

    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = location;
        self
    }
}
