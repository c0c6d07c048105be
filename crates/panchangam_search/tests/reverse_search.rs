//! Integration tests for the reverse date search.
//!
//! Each found date is fed back through the forward calculation, and the
//! parallel scan is checked against the sequential one.

use chrono::NaiveDate;
use panchangam_ephem::{
    AnalyticEphemeris, Body, CelestialLongitudes, EphemerisError, EphemerisProvider, GeoLocation,
};
use panchangam_search::{
    DateQuery, PanchangConfig, PanchangEngine, SearchError, find_date, find_date_parallel,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn analytic() -> PanchangEngine<AnalyticEphemeris> {
    PanchangEngine::analytic(PanchangConfig::default()).unwrap()
}

fn assert_round_trip(engine: &PanchangEngine<AnalyticEphemeris>, query: &DateQuery, expected: NaiveDate) {
    let found = find_date(engine, query).unwrap();
    assert_eq!(found, Some(expected), "query {query:?}");
    let p = engine.calculate(expected).unwrap();
    assert!(query.matches(&p));
    // The day before must not already match.
    let prev = expected.pred_opt().unwrap();
    assert!(!query.matches(&engine.calculate(prev).unwrap()));
}

#[test]
fn shravana_shukla_dashami_2024() {
    let engine = analytic();
    let q = DateQuery::new("Shravana", "Shukla", "Dashami").with_year(2024);
    assert_round_trip(&engine, &q, ymd(2024, 8, 15));
}

#[test]
fn kartika_purnima_2025() {
    let engine = analytic();
    let q = DateQuery::new("Kartika", "Shukla", "Purnima").with_year(2025);
    assert_round_trip(&engine, &q, ymd(2025, 11, 5));
}

#[test]
fn jyeshtha_purnima_2026_is_in_the_adhika_month() {
    let engine = analytic();
    let q = DateQuery::new("Jyeshtha", "Shukla", "Purnima").with_year(2026);
    assert_round_trip(&engine, &q, ymd(2026, 5, 31));
    let p = engine.calculate(ymd(2026, 5, 31)).unwrap();
    assert!(p.attributes.is_adhika);
}

#[test]
fn alternate_spelling_and_case() {
    let engine = analytic();
    let q = DateQuery::new("bhadrapada", "SHUKLA", "Shashti").with_year(2024);
    assert_eq!(find_date(&engine, &q).unwrap(), Some(ymd(2024, 9, 9)));
}

#[test]
fn alternate_masa_spelling() {
    let engine = analytic();
    let q = DateQuery::new("ashwin", "krishna", "chaturdashi").with_year(2025);
    assert_eq!(find_date(&engine, &q).unwrap(), Some(ymd(2025, 10, 20)));
}

#[test]
fn tithi_target_may_carry_its_paksha() {
    let engine = analytic();
    let q = DateQuery::new("Bhadrapada", "Shukla", "Shukla Shashthi").with_year(2024);
    assert_round_trip(&engine, &q, ymd(2024, 9, 9));
}

#[test]
fn masa_target_may_carry_adhika() {
    let engine = analytic();
    let q = DateQuery::new("Adhika Jyeshtha", "Shukla", "Purnima").with_year(2026);
    assert_round_trip(&engine, &q, ymd(2026, 5, 31));
    // Days of the nija month do not carry the prefix.
    let nija = engine.calculate(ymd(2026, 6, 29)).unwrap();
    assert!(!q.matches(&nija));
}

#[test]
fn parallel_agrees_with_sequential() {
    let engine = analytic();
    for q in [
        DateQuery::new("Magha", "Shukla", "Trayodashi").with_year(2026),
        DateQuery::new("Shravana", "Shukla", "Dashami").with_year(2024),
    ] {
        let seq = find_date(&engine, &q).unwrap();
        let par = find_date_parallel(&engine, &q).unwrap();
        assert!(seq.is_some());
        assert_eq!(seq, par, "query {q:?}");
    }
}

#[test]
fn empty_target_rejected_before_scanning() {
    let engine = analytic();
    let q = DateQuery::new("", "Shukla", "Purnima").with_year(2025);
    assert_eq!(
        find_date(&engine, &q),
        Err(SearchError::InvalidQuery("masa must not be empty".into()))
    );
    assert!(matches!(
        find_date_parallel(&engine, &q),
        Err(SearchError::InvalidQuery(_))
    ));
}

/// Every day is Purnima in the same adhika month.
struct FrozenSky;

impl EphemerisProvider for FrozenSky {
    fn longitudes(&self, _jd_ut: f64) -> Result<CelestialLongitudes, EphemerisError> {
        Ok(CelestialLongitudes::from_degrees(34.14, 208.14))
    }

    fn next_rising(&self, body: Body, _: &GeoLocation, _: f64) -> Result<f64, EphemerisError> {
        Err(EphemerisError::AlwaysDown(body))
    }

    fn next_setting(&self, body: Body, _: &GeoLocation, _: f64) -> Result<f64, EphemerisError> {
        Err(EphemerisError::AlwaysDown(body))
    }

    fn previous_new_moon(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        Ok(jd_ut - 14.0)
    }

    fn next_new_moon(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        Ok(jd_ut + 15.0)
    }
}

fn frozen(window: u32) -> PanchangEngine<FrozenSky> {
    let config = PanchangConfig {
        search_window_days: window,
        ..PanchangConfig::default()
    };
    PanchangEngine::new(FrozenSky, config).unwrap()
}

#[test]
fn not_found_is_none() {
    let engine = frozen(40);
    let q = DateQuery::new("Kartika", "Shukla", "Purnima").with_year(2030);
    assert_eq!(find_date(&engine, &q).unwrap(), None);
    assert_eq!(find_date_parallel(&engine, &q).unwrap(), None);
}

#[test]
fn first_day_of_window_can_match() {
    let engine = frozen(40);
    let q = DateQuery::new("Vaishakha", "Shukla", "Purnima").with_year(2030);
    assert_eq!(find_date(&engine, &q).unwrap(), Some(ymd(2030, 1, 1)));
    assert_eq!(find_date_parallel(&engine, &q).unwrap(), Some(ymd(2030, 1, 1)));
}

#[test]
fn target_is_substring_of_computed_name() {
    // "Purn" is contained in "Purnima".
    let engine = frozen(5);
    let q = DateQuery::new("Vaish", "Shuk", "Purn").with_year(2030);
    assert_eq!(find_date(&engine, &q).unwrap(), Some(ymd(2030, 1, 1)));
}
