//! Yoga (luni-solar sum) classification.
//!
//! The sum of sidereal Sun and Moon longitudes, reduced modulo 360, is cut
//! into 27 equal yogas of 13 deg 20'.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::NameError;
use crate::names::parse_from_table;
use crate::util::{normalize_360, segment_index};

/// Span of one yoga: 360/27 degrees.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// The 27 yogas from Vishkumbha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Vishkumbha,
    Preeti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 in order (index 0 = Vishkumbha, 26 = Vaidhriti).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Preeti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    /// Display name as used in panchang output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbha => "Vishkumbha",
            Self::Preeti => "Preeti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Entry at `index`, reduced modulo 27.
    pub const fn from_index(index: u32) -> Self {
        ALL_YOGAS[(index % 27) as usize]
    }

    /// All 27 in order.
    pub const fn all() -> &'static [Yoga; 27] {
        &ALL_YOGAS
    }
}

impl fmt::Display for Yoga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Yoga {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for Yoga {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from_table("yoga", s, &ALL_YOGAS, Self::name)
    }
}

/// Yoga position derived from a longitude sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaPosition {
    /// The yoga.
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
    /// Sum `(sun + moon) mod 360` the yoga was taken from.
    pub sum_deg: f64,
}

/// Classify sidereal Sun and Moon longitudes (degrees) into a yoga.
pub fn yoga_from_longitudes(sun_sidereal_deg: f64, moon_sidereal_deg: f64) -> YogaPosition {
    yoga_from_sum(sun_sidereal_deg + moon_sidereal_deg)
}

/// Classify a longitude sum in degrees; wraps modulo 360 first.
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let sum = normalize_360(sum_deg);
    let idx = segment_index(sum, YOGA_SEGMENT_DEG, 27);
    YogaPosition {
        yoga: Yoga::from_index(idx as u32),
        yoga_index: idx,
        sum_deg: sum,
    }
}
