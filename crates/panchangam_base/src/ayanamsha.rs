//! Fixed ayanamsha and tropical → sidereal conversion.
//!
//! The engine uses a single constant offset rather than a precession
//! model. The value is carried as a newtype so callers cannot mix it up
//! with a longitude.

/// Default ayanamsha in degrees.
pub const DEFAULT_AYANAMSHA_DEG: f64 = 24.14;

/// A constant sidereal offset in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ayanamsha(pub f64);

impl Default for Ayanamsha {
    fn default() -> Self {
        Self(DEFAULT_AYANAMSHA_DEG)
    }
}

impl Ayanamsha {
    /// Offset in degrees.
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// Sidereal longitude in [0, 360) from a tropical longitude in degrees.
    pub fn sidereal_deg(self, tropical_deg: f64) -> f64 {
        crate::util::normalize_360(tropical_deg - self.0)
    }

    /// Sidereal longitude in [0, 360) degrees from a tropical longitude in radians.
    pub fn sidereal_from_rad(self, tropical_rad: f64) -> f64 {
        self.sidereal_deg(tropical_rad.to_degrees())
    }
}
