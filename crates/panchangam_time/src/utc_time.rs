//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the instant type carried through results. It converts to
//! and from Julian Date (UT) and interoperates with `chrono`.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Date (UT) of this instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar form of a Julian Date (UT).
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to a `chrono` UTC timestamp, rounded to the millisecond.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, TimeError> {
        jd_to_datetime(self.to_jd())
    }
}

impl From<NaiveDateTime> for UtcTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 * 1e-9,
        }
    }
}

/// Julian Date (UT) of a naive UTC timestamp.
pub fn datetime_to_jd(dt: &NaiveDateTime) -> f64 {
    let utc = dt.and_utc();
    let millis = utc.timestamp_millis() as f64;
    UNIX_EPOCH_JD + millis / (SECONDS_PER_DAY * 1000.0)
}

/// `chrono` UTC timestamp of a Julian Date (UT), rounded to the millisecond.
pub fn jd_to_datetime(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::OutOfRange(jd));
    }
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(TimeError::OutOfRange(jd));
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or(TimeError::OutOfRange(jd))
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
