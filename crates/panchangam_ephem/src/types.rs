//! Bodies and coordinate value types.

use std::fmt;

/// Bodies the engine needs positions and rise/set times for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }

    /// Mean rate at which the body's hour angle grows, degrees per day.
    ///
    /// Sidereal rotation minus the body's mean eastward motion in right
    /// ascension.
    pub const fn hour_angle_rate_deg_per_day(self) -> f64 {
        match self {
            Self::Sun => 360.0,
            Self::Moon => 347.81,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apparent geocentric tropical ecliptic longitudes at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialLongitudes {
    /// Sun's tropical longitude in radians, [0, 2π).
    pub sun_tropical_rad: f64,
    /// Moon's tropical longitude in radians, [0, 2π).
    pub moon_tropical_rad: f64,
}

impl CelestialLongitudes {
    pub fn from_degrees(sun_deg: f64, moon_deg: f64) -> Self {
        Self {
            sun_tropical_rad: sun_deg.rem_euclid(360.0).to_radians(),
            moon_tropical_rad: moon_deg.rem_euclid(360.0).to_radians(),
        }
    }

    pub fn sun_deg(&self) -> f64 {
        self.sun_tropical_rad.to_degrees()
    }

    pub fn moon_deg(&self) -> f64 {
        self.moon_tropical_rad.to_degrees()
    }

    /// Moon − Sun elongation in degrees, [0, 360).
    pub fn elongation_deg(&self) -> f64 {
        panchangam_base::elongation_deg(self.sun_deg(), self.moon_deg())
    }
}

/// Apparent geocentric equatorial position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in radians, [0, 2π).
    pub ra_rad: f64,
    /// Declination in radians.
    pub dec_rad: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}
