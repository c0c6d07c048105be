//! Reverse search: the first date on which a (masa, paksha, tithi)
//! combination holds.
//!
//! Brute-force day-by-day scan from January 1 of the target year across
//! the configured window (380 days by default). Names are matched after
//! spelling normalization, as "target is a substring of computed".

use chrono::{Datelike, NaiveDate, Utc};
use log::{debug, info};
use panchangam_base::name_matches;
use panchangam_ephem::EphemerisProvider;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::SearchError;
use crate::panchang::PanchangEngine;
use crate::panchang_types::PanchangSnapshot;

/// Target of a reverse search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateQuery {
    pub masa: String,
    pub paksha: String,
    pub tithi: String,
    /// Year whose January 1 starts the scan; current UTC year if `None`.
    pub year: Option<i32>,
}

impl DateQuery {
    pub fn new(masa: impl Into<String>, paksha: impl Into<String>, tithi: impl Into<String>) -> Self {
        Self {
            masa: masa.into(),
            paksha: paksha.into(),
            tithi: tithi.into(),
            year: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Reject blank target names.
    pub fn validate(&self) -> Result<(), SearchError> {
        let fields = [
            ("masa", &self.masa),
            ("paksha", &self.paksha),
            ("tithi", &self.tithi),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(SearchError::InvalidQuery(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }

    /// Whether a computed panchang satisfies all three targets.
    ///
    /// The masa target is matched against the display name, so `Jyeshtha`
    /// matches both months of an adhika pair and `Adhika Jyeshtha` only the
    /// first. The tithi target may carry its paksha (`Shukla Shashthi`).
    pub fn matches(&self, snapshot: &PanchangSnapshot) -> bool {
        let a = &snapshot.attributes;
        let tithi_full = format!("{} {}", a.paksha, a.tithi);
        name_matches(&snapshot.formatted_masa(), &self.masa)
            && name_matches(a.paksha.name(), &self.paksha)
            && name_matches(&tithi_full, &self.tithi)
    }

    /// First day of the scan.
    pub fn start_date(&self) -> Result<NaiveDate, SearchError> {
        let year = self.year.unwrap_or_else(|| Utc::now().year());
        NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| SearchError::InvalidQuery(format!("year {year} out of range")))
    }
}

fn candidate_dates(start: NaiveDate, window_days: u32) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take(window_days as usize)
}

/// Sequential scan; the first matching day wins.
///
/// Returns `Ok(None)` when the window is exhausted without a match.
pub fn find_date<P: EphemerisProvider>(
    engine: &PanchangEngine<P>,
    query: &DateQuery,
) -> Result<Option<NaiveDate>, SearchError> {
    query.validate()?;
    let start = query.start_date()?;
    let window = engine.config().search_window_days;

    for date in candidate_dates(start, window) {
        let snapshot = engine.calculate(date)?;
        if query.matches(&snapshot) {
            info!(
                "{} {} {} first falls on {date}",
                query.masa, query.paksha, query.tithi
            );
            return Ok(Some(date));
        }
    }

    info!(
        "{} {} {} not found in {window} days from {start}",
        query.masa, query.paksha, query.tithi
    );
    Ok(None)
}

/// Parallel scan over the same window as [`find_date`].
///
/// Days are evaluated concurrently and reduced to the earliest match, so
/// the result is identical to the sequential scan.
pub fn find_date_parallel<P: EphemerisProvider>(
    engine: &PanchangEngine<P>,
    query: &DateQuery,
) -> Result<Option<NaiveDate>, SearchError> {
    query.validate()?;
    let start = query.start_date()?;
    let window = engine.config().search_window_days;
    let dates: Vec<NaiveDate> = candidate_dates(start, window).collect();
    debug!("parallel scan of {} days from {start}", dates.len());

    let found = dates
        .par_iter()
        .map(|&date| -> Result<Option<NaiveDate>, SearchError> {
            let snapshot = engine.calculate(date)?;
            Ok(query.matches(&snapshot).then_some(date))
        })
        .try_reduce(
            || None,
            |a, b| {
                Ok(match (a, b) {
                    (Some(x), Some(y)) => Some(x.min(y)),
                    (x, y) => x.or(y),
                })
            },
        )?;

    match found {
        Some(date) => info!(
            "{} {} {} first falls on {date}",
            query.masa, query.paksha, query.tithi
        ),
        None => info!(
            "{} {} {} not found in {window} days from {start}",
            query.masa, query.paksha, query.tithi
        ),
    }
    Ok(found)
}
