//! Attendance forecast over the coming days.
//!
//! Flags festival days and peak-season days (Purnima or Ekadashi in
//! Kartika, Shravana or Magha) so that staffing and stock can be planned.

use std::fmt;

use chrono::NaiveDate;
use log::{info, warn};
use panchangam_base::{Festival, Masa, Tithi};
use panchangam_ephem::EphemerisProvider;
use serde::Serialize;

use crate::error::SearchError;
use crate::panchang::PanchangEngine;
use crate::panchang_types::PanchangSnapshot;

/// Months in which Purnima and Ekadashi draw the heaviest attendance.
pub const PEAK_SEASON_MASAS: [Masa; 3] = [Masa::Kartika, Masa::Shravana, Masa::Magha];

const PEAK_SEASON_TITHI_NAMES: [&str; 2] = ["Purnima", "Ekadashi"];

/// Why a day was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForecastReason {
    Festival { festival: Festival },
    PeakSeason { masa: Masa, tithi: Tithi },
}

impl fmt::Display for ForecastReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Festival { festival } => write!(f, "{festival}"),
            Self::PeakSeason { masa, tithi } => write!(f, "{masa} {tithi} (peak season)"),
        }
    }
}

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub masa: Masa,
    pub is_adhika: bool,
    pub tithi: Tithi,
    pub reasons: Vec<ForecastReason>,
}

impl ForecastDay {
    pub fn is_notable(&self) -> bool {
        !self.reasons.is_empty()
    }
}

/// Overall expectation for the forecast window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    /// At least one day is flagged.
    Busy,
    Calm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forecast {
    pub days: Vec<ForecastDay>,
    pub outlook: Outlook,
}

impl Forecast {
    pub fn notable_days(&self) -> impl Iterator<Item = &ForecastDay> {
        self.days.iter().filter(|d| d.is_notable())
    }
}

/// Reasons to flag the day described by `snapshot`.
pub fn reasons_for(snapshot: &PanchangSnapshot) -> Vec<ForecastReason> {
    let a = &snapshot.attributes;
    let mut reasons = Vec::new();
    if let Some(festival) = snapshot.festival {
        reasons.push(ForecastReason::Festival { festival });
    }
    let peak_tithi = PEAK_SEASON_TITHI_NAMES
        .iter()
        .any(|name| a.tithi.name().contains(name));
    if PEAK_SEASON_MASAS.contains(&a.maasa) && peak_tithi {
        reasons.push(ForecastReason::PeakSeason {
            masa: a.maasa,
            tithi: a.tithi,
        });
    }
    reasons
}

/// Scan `days` consecutive dates from `start`.
pub fn forecast<P: EphemerisProvider>(
    engine: &PanchangEngine<P>,
    start: NaiveDate,
    days: u32,
) -> Result<Forecast, SearchError> {
    if days == 0 {
        return Err(SearchError::InvalidQuery("forecast needs at least one day".into()));
    }

    let days = start
        .iter_days()
        .take(days as usize)
        .map(|date| -> Result<ForecastDay, SearchError> {
            let snapshot = engine.calculate(date)?;
            Ok(ForecastDay {
                date,
                masa: snapshot.attributes.maasa,
                is_adhika: snapshot.attributes.is_adhika,
                tithi: snapshot.attributes.tithi,
                reasons: reasons_for(&snapshot),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let outlook = if days.iter().any(ForecastDay::is_notable) {
        Outlook::Busy
    } else {
        Outlook::Calm
    };

    match outlook {
        Outlook::Busy => {
            let summary: Vec<String> = days
                .iter()
                .flat_map(|d| d.reasons.iter().map(move |r| format!("{} is {r}", d.date)))
                .collect();
            warn!("heavy attendance expected: {}", summary.join(", "));
        }
        Outlook::Calm => info!("no festivals in the {} days from {start}", days.len()),
    }

    Ok(Forecast { days, outlook })
}
