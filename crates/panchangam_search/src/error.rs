//! Error types for the panchang engine and date searches.

use panchangam_base::NameError;
use panchangam_ephem::EphemerisError;
use panchangam_time::TimeError;
use thiserror::Error;

/// Errors from panchang computation, reverse search and forecasting.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Malformed date or time conversion failure.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Ephemeris failure other than a recovered circumpolar condition.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// Unknown calendar name.
    #[error(transparent)]
    Name(#[from] NameError),
    /// Query parameters rejected before any computation.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    /// Configuration rejected before any computation.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
