//! Panchang engine, reverse date search and attendance forecast.
//!
//! This crate provides:
//! - `PanchangEngine`: the full panchang for a civil date, with graceful
//!   degradation of rise/set fields at circumpolar locations
//! - Masa resolution from bracketing new moons
//! - Reverse search for the first date of a (masa, paksha, tithi) triple,
//!   sequential and parallel
//! - A festival/peak-season forecast over the coming days

pub mod config;
pub mod error;
pub mod forecast;
pub mod masa;
pub mod panchang;
pub mod panchang_types;
pub mod reverse;

pub use config::{
    BANGALORE, DEFAULT_FORECAST_DAYS, DEFAULT_SEARCH_WINDOW_DAYS, PanchangConfig, UNAVAILABLE,
};
pub use error::SearchError;
pub use forecast::{
    Forecast, ForecastDay, ForecastReason, Outlook, PEAK_SEASON_MASAS, forecast, reasons_for,
};
pub use masa::{masa_for_instant, sun_rashi_at};
pub use panchang::{ElementsAt, PanchangEngine, SunMoonTimes};
pub use panchang_types::{
    Attributes, FlatPanchang, Inauspicious, MasaInfo, PanchangSnapshot, SunCycle,
    sanskrit_description,
};
pub use reverse::{DateQuery, find_date, find_date_parallel};
