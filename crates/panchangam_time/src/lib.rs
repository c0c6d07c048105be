//! Time handling for the panchangam engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - Greenwich/local mean sidereal time
//! - `UtcTime`, the instant type carried in results, with `chrono` interop
//! - Civil-date parsing, fixed UTC offsets and 12-hour clock formatting

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use civil::{
    CLOCK_LAYOUT, DATE_LAYOUTS, IST_OFFSET_MINUTES, fixed_offset, format_clock_12h, local_date,
    local_to_jd, parse_civil_date, utc_midnight_jd,
};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_midnight,
    jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{SIDEREAL_DEG_PER_DAY, gmst_deg, gmst_rad, local_sidereal_time_rad};
pub use utc_time::{UtcTime, datetime_to_jd, jd_to_datetime};
