//! Civil dates, fixed UTC offsets and wall-clock formatting.

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeDelta};

use crate::error::TimeError;
use crate::utc_time::{datetime_to_jd, jd_to_datetime};

/// Indian Standard Time, UTC+05:30.
pub const IST_OFFSET_MINUTES: i32 = 330;

/// Date layouts accepted by [`parse_civil_date`], tried in order.
pub const DATE_LAYOUTS: [&str; 2] = ["%Y-%m-%d", "%d-%m-%Y"];

/// 12-hour wall-clock layout, e.g. `06:42 AM`.
pub const CLOCK_LAYOUT: &str = "%I:%M %p";

/// Parse `YYYY-MM-DD`, falling back to `DD-MM-YYYY`.
pub fn parse_civil_date(input: &str) -> Result<NaiveDate, TimeError> {
    let s = input.trim();
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(s, layout).ok())
        .ok_or_else(|| TimeError::InvalidDate(input.to_string()))
}

/// Build a `chrono` fixed offset from minutes east of UTC.
pub fn fixed_offset(offset_minutes: i32) -> Result<FixedOffset, TimeError> {
    FixedOffset::east_opt(offset_minutes * 60).ok_or(TimeError::InvalidOffset(offset_minutes))
}

/// Julian Date (UT) of a wall-clock time on a civil date at a fixed offset.
pub fn local_to_jd(date: NaiveDate, time: NaiveTime, offset_minutes: i32) -> Result<f64, TimeError> {
    fixed_offset(offset_minutes)?;
    let utc = date.and_time(time) - TimeDelta::minutes(offset_minutes as i64);
    Ok(datetime_to_jd(&utc))
}

/// Julian Date (UT) of 00:00 UTC on `date`.
pub fn utc_midnight_jd(date: NaiveDate) -> f64 {
    datetime_to_jd(&date.and_time(NaiveTime::MIN))
}

/// Format an instant as 12-hour wall-clock text at a fixed offset.
///
/// Seconds are truncated, not rounded.
pub fn format_clock_12h(jd_ut: f64, offset_minutes: i32) -> Result<String, TimeError> {
    let offset = fixed_offset(offset_minutes)?;
    let dt = jd_to_datetime(jd_ut)?.with_timezone(&offset);
    Ok(dt.format(CLOCK_LAYOUT).to_string())
}

/// Civil date of an instant at a fixed offset.
pub fn local_date(jd_ut: f64, offset_minutes: i32) -> Result<NaiveDate, TimeError> {
    let offset = fixed_offset(offset_minutes)?;
    Ok(jd_to_datetime(jd_ut)?.with_timezone(&offset).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_iso_layout() {
        assert_eq!(parse_civil_date("2024-01-15").unwrap(), ymd(2024, 1, 15));
    }

    #[test]
    fn parse_day_first_layout() {
        assert_eq!(parse_civil_date("15-01-2024").unwrap(), ymd(2024, 1, 15));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_civil_date(" 2024-03-01\n").unwrap(), ymd(2024, 3, 1));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_civil_date("15/01/2024").unwrap_err();
        assert_eq!(err, TimeError::InvalidDate("15/01/2024".into()));
    }

    #[test]
    fn parse_rejects_impossible_date() {
        assert!(parse_civil_date("2023-02-29").is_err());
    }

    #[test]
    fn ist_midnight_is_previous_utc_evening() {
        let jd = local_to_jd(ymd(2024, 1, 15), NaiveTime::MIN, IST_OFFSET_MINUTES).unwrap();
        // 2024-01-14 18:30 UTC
        let expected = utc_midnight_jd(ymd(2024, 1, 14)) + 18.5 / 24.0;
        assert!((jd - expected).abs() < 1e-9);
    }

    #[test]
    fn clock_format_morning() {
        // 2024-01-15 01:12 UTC = 06:42 IST
        let jd = utc_midnight_jd(ymd(2024, 1, 15)) + 72.0 / 1440.0;
        assert_eq!(format_clock_12h(jd, IST_OFFSET_MINUTES).unwrap(), "06:42 AM");
    }

    #[test]
    fn clock_format_evening_truncates_seconds() {
        // 12:59:59 UTC = 18:29:59 IST
        let jd = utc_midnight_jd(ymd(2024, 1, 15)) + (12.0 * 3600.0 + 59.0 * 60.0 + 59.0) / 86_400.0;
        assert_eq!(format_clock_12h(jd, IST_OFFSET_MINUTES).unwrap(), "06:29 PM");
    }

    #[test]
    fn local_date_crosses_midnight() {
        // 20:00 UTC on the 14th is already the 15th in IST
        let jd = utc_midnight_jd(ymd(2024, 1, 14)) + 20.0 / 24.0;
        assert_eq!(local_date(jd, IST_OFFSET_MINUTES).unwrap(), ymd(2024, 1, 15));
        assert_eq!(local_date(jd, 0).unwrap(), ymd(2024, 1, 14));
    }

    #[test]
    fn offset_out_of_range() {
        assert_eq!(fixed_offset(24 * 60), Err(TimeError::InvalidOffset(1440)));
    }
}
