//! Season, solstice half and weekday.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::NameError;
use crate::masa::Masa;
use crate::names::parse_from_table;
use crate::tithi::Tithi;
use crate::util::normalize_360;

/// The 6 seasons starting from Vasantha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ritu {
    Vasantha,
    Greeshma,
    Varsha,
    Sharad,
    Hemantha,
    Shishira,
}

/// All 6 in order (index 0 = Vasantha, 5 = Shishira).
pub const ALL_RITUS: [Ritu; 6] = [
    Ritu::Vasantha,
    Ritu::Greeshma,
    Ritu::Varsha,
    Ritu::Sharad,
    Ritu::Hemantha,
    Ritu::Shishira,
];

impl Ritu {
    /// Display name as used in panchang output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vasantha => "Vasantha",
            Self::Greeshma => "Greeshma",
            Self::Varsha => "Varsha",
            Self::Sharad => "Sharad",
            Self::Hemantha => "Hemantha",
            Self::Shishira => "Shishira",
        }
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Entry at `index`, reduced modulo 6.
    pub const fn from_index(index: u32) -> Self {
        ALL_RITUS[(index % 6) as usize]
    }

    /// All 6 in order.
    pub const fn all() -> &'static [Ritu; 6] {
        &ALL_RITUS
    }
}

impl fmt::Display for Ritu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Ritu {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for Ritu {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from_table("ritu", s, &ALL_RITUS, Self::name)
    }
}

/// Ritu for a masa: two months per season, Chaitra and Vaishakha in Vasantha.
pub const fn ritu_from_masa(masa: Masa) -> Ritu {
    Ritu::from_index(masa.index() as u32 / 2)
}

/// Half-year between the solstices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ayana {
    /// Sun moving north: sidereal Makara (270) through Mithuna (< 90).
    Uttarayana,
    /// Sun moving south: sidereal Karka (90) through Dhanu (< 270).
    Dakshinayana,
}

impl Ayana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uttarayana => "Uttarayana",
            Self::Dakshinayana => "Dakshinayana",
        }
    }
}

impl fmt::Display for Ayana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Ayana {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Ayana from the Sun's sidereal longitude: [90, 270) is Dakshinayana.
pub fn ayana_from_sidereal_longitude(sun_sidereal_deg: f64) -> Ayana {
    let lon = normalize_360(sun_sidereal_deg);
    if (90.0..270.0).contains(&lon) {
        Ayana::Dakshinayana
    } else {
        Ayana::Uttarayana
    }
}

/// Weekday (vasara) names, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Indu,
    Bhouma,
    Soumya,
    Guru,
    Bhrigu,
    Sthira,
    Bhanu,
}

/// All 7 in order (index 0 = Indu (Monday), 6 = Bhanu (Sunday)).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Indu,
    Vaar::Bhouma,
    Vaar::Soumya,
    Vaar::Guru,
    Vaar::Bhrigu,
    Vaar::Sthira,
    Vaar::Bhanu,
];

impl Vaar {
    /// Display name as used in panchang output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Indu => "Indu",
            Self::Bhouma => "Bhouma",
            Self::Soumya => "Soumya",
            Self::Guru => "Guru",
            Self::Bhrigu => "Bhrigu",
            Self::Sthira => "Sthira",
            Self::Bhanu => "Bhanu",
        }
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Entry at `index`, reduced modulo 7.
    pub const fn from_index(index: u32) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }

    /// All 7 in order.
    pub const fn all() -> &'static [Vaar; 7] {
        &ALL_VAARS
    }
}

impl fmt::Display for Vaar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Vaar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for Vaar {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from_table("vasara", s, &ALL_VAARS, Self::name)
    }
}

/// Vaar from a Monday-first weekday index (Monday = 0 .. Sunday = 6).
pub const fn vaar_from_weekday(days_from_monday: u32) -> Vaar {
    Vaar::from_index(days_from_monday)
}

/// Observance tag derived from the tithi name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Festival {
    Purnima,
    Amavasya,
    Ekadashi,
}

impl Festival {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            Self::Ekadashi => "Ekadashi",
        }
    }
}

impl fmt::Display for Festival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Festival {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Festival tag for a tithi, if its name carries one.
pub fn festival_for_tithi(tithi: Tithi) -> Option<Festival> {
    let name = tithi.name();
    [Festival::Purnima, Festival::Amavasya, Festival::Ekadashi]
        .into_iter()
        .find(|f| name.contains(f.name()))
}
