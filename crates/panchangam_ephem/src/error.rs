//! Error types for ephemeris queries.

use panchangam_time::TimeError;
use thiserror::Error;

use crate::types::Body;

/// Errors from position, rise/set or lunar-phase computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Body stays above the horizon for the whole search window.
    #[error("{0} is always above the horizon")]
    AlwaysUp(Body),
    /// Body stays below the horizon for the whole search window.
    #[error("{0} is always below the horizon")]
    AlwaysDown(Body),
    /// Iterative search did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Error from time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}

impl EphemerisError {
    /// Whether this is an always-up/always-down condition rather than a
    /// computational failure.
    pub fn is_circumpolar(&self) -> bool {
        matches!(self, Self::AlwaysUp(_) | Self::AlwaysDown(_))
    }
}
