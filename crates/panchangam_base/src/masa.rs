//! Masa (lunar month) naming and the adhika (leap month) rule.
//!
//! Months run new moon to new moon (amanta). A month takes its name from
//! the Sun's sidereal rashi at the new moon that ends it: Sun in Mesha at
//! the closing new moon names Chaitra. When the Sun stays in one rashi
//! across a whole lunation no sankranti falls inside the month, and it is
//! an adhika month carrying the name of the month that follows it.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::NameError;
use crate::names::parse_from_table;

/// The 12 lunar months starting from Chaitra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashwayuja,
    Kartika,
    Margashira,
    Pushya,
    Magha,
    Phalguna,
}

/// All 12 in order (index 0 = Chaitra, 11 = Phalguna).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashwayuja,
    Masa::Kartika,
    Masa::Margashira,
    Masa::Pushya,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    /// Display name as used in panchang output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashwayuja => "Ashwayuja",
            Self::Kartika => "Kartika",
            Self::Margashira => "Margashira",
            Self::Pushya => "Pushya",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Entry at `index`, reduced modulo 12.
    pub const fn from_index(index: u32) -> Self {
        ALL_MASAS[(index % 12) as usize]
    }

    /// All 12 in order.
    pub const fn all() -> &'static [Masa; 12] {
        &ALL_MASAS
    }
}

impl fmt::Display for Masa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Masa {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for Masa {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from_table("masa", s, &ALL_MASAS, Self::name)
    }
}

impl Masa {
    /// Name with an `Adhika ` prefix for leap months.
    pub fn display_name(self, adhika: bool) -> String {
        if adhika {
            format!("Adhika {}", self.name())
        } else {
            self.name().to_string()
        }
    }
}

/// Masa named by the Sun's rashi index at the closing new moon.
pub const fn masa_from_rashi_index(rashi_index: u8) -> Masa {
    Masa::from_index(rashi_index as u32)
}

/// Outcome of the adhika test over one lunation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasaResolution {
    /// The masa.
    pub masa: Masa,
    /// Whether this is an adhika (intercalary) month.
    pub adhika: bool,
}

/// Resolve masa and adhika status from the Sun's sidereal rashi index at
/// the opening and closing new moons.
///
/// Different rashis: nija month named by `rashi_at_end`.
/// Same rashi: adhika month named by `rashi_at_start + 1`.
pub const fn resolve_masa(rashi_at_start: u8, rashi_at_end: u8) -> MasaResolution {
    if rashi_at_start == rashi_at_end {
        MasaResolution {
            masa: Masa::from_index(rashi_at_start as u32 + 1),
            adhika: true,
        }
    } else {
        MasaResolution {
            masa: masa_from_rashi_index(rashi_at_end),
            adhika: false,
        }
    }
}
