//! Integration tests: civil date parsing through Julian Date and back to
//! wall-clock text.

use chrono::NaiveTime;
use panchangam_time::{
    IST_OFFSET_MINUTES, UtcTime, format_clock_12h, local_date, local_to_jd, parse_civil_date,
};

#[test]
fn both_layouts_name_the_same_instant() {
    let a = parse_civil_date("2025-10-20").unwrap();
    let b = parse_civil_date("20-10-2025").unwrap();
    assert_eq!(a, b);
}

#[test]
fn local_wall_clock_survives_roundtrip() {
    let date = parse_civil_date("2024-08-15").unwrap();
    let time = NaiveTime::from_hms_opt(0, 30, 0).unwrap();
    let jd = local_to_jd(date, time, IST_OFFSET_MINUTES).unwrap();

    assert_eq!(format_clock_12h(jd, IST_OFFSET_MINUTES).unwrap(), "12:30 AM");
    assert_eq!(local_date(jd, IST_OFFSET_MINUTES).unwrap(), date);

    let utc = UtcTime::from_jd(jd);
    assert_eq!((utc.year, utc.month, utc.day, utc.hour), (2024, 8, 14, 19));
    assert!(utc.minute == 0 || (utc.minute == 59 && utc.second > 59.9));
}

#[test]
fn utc_offset_zero_formats_utc() {
    let date = parse_civil_date("2024-12-31").unwrap();
    let time = NaiveTime::from_hms_opt(23, 15, 0).unwrap();
    let jd = local_to_jd(date, time, 0).unwrap();
    assert_eq!(format_clock_12h(jd, 0).unwrap(), "11:15 PM");
    assert_eq!(format_clock_12h(jd, IST_OFFSET_MINUTES).unwrap(), "04:45 AM");
}
