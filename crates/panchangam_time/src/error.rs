//! Error types for civil-time parsing and conversion.

use thiserror::Error;

/// Errors from date parsing or instant conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input did not match any accepted date layout.
    #[error("invalid date '{0}': expected YYYY-MM-DD or DD-MM-YYYY")]
    InvalidDate(String),
    /// Calendar fields do not name a real date or time of day.
    #[error("invalid calendar fields: {0}")]
    InvalidCalendar(String),
    /// UTC offset outside +/-24h.
    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),
    /// Julian Date cannot be represented as a civil timestamp.
    #[error("Julian Date {0} is outside the representable range")]
    OutOfRange(f64),
}
