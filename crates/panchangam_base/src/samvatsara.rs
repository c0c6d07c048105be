//! Samvatsara (60-year cycle) of the lunisolar year.
//!
//! The year is counted in the Saka era (`CE - 78`). The lunisolar year
//! begins with Chaitra, so January-March dates that still fall in the
//! closing months Pushya, Magha or Phalguna belong to the previous Saka
//! year.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::NameError;
use crate::masa::Masa;
use crate::names::parse_from_table;

/// Offset from CE year to Saka year.
pub const SAKA_OFFSET: i32 = 78;

/// Shift aligning Saka year to the cycle: Saka 1946 (CE 2024-25) is Krodhi.
pub const SAMVATSARA_CYCLE_SHIFT: i32 = 11;

/// The 60 samvatsaras of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Samvatsara {
    Prabhava,
    Vibhava,
    Shukla,
    Pramoda,
    Prajotpatti,
    Angirasa,
    Srimukha,
    Bhava,
    Yuva,
    Dhatri,
    Ishvara,
    Bahudhanya,
    Pramathi,
    Vikrama,
    Vrishaprajna,
    Chitrabhanu,
    Subhanu,
    Tarana,
    Parthiva,
    Vyaya,
    Sarvajit,
    Sarvadhari,
    Virodhi,
    Vikriti,
    Khara,
    Nandana,
    Vijaya,
    Jaya,
    Manmatha,
    Durmukha,
    Hevilambi,
    Vilambi,
    Vikari,
    Sharvari,
    Plava,
    Shubhakrit,
    Shobhakrit,
    Krodhi,
    Viswavasu,
    Parabhava,
    Plavanga,
    Keelaka,
    Saumya,
    Sadharana,
    Virodhikrit,
    Paridhavi,
    Pramadicha,
    Ananda,
    Rakshasa,
    Nala,
    Pingala,
    Kalayukthi,
    Siddharthi,
    Raudra,
    Durmathi,
    Dundubhi,
    Rudhirodgari,
    Raktakshi,
    Krodhana,
    Akshaya,
}

/// All 60 in order (index 0 = Prabhava, 59 = Akshaya).
pub const ALL_SAMVATSARAS: [Samvatsara; 60] = [
    Samvatsara::Prabhava,
    Samvatsara::Vibhava,
    Samvatsara::Shukla,
    Samvatsara::Pramoda,
    Samvatsara::Prajotpatti,
    Samvatsara::Angirasa,
    Samvatsara::Srimukha,
    Samvatsara::Bhava,
    Samvatsara::Yuva,
    Samvatsara::Dhatri,
    Samvatsara::Ishvara,
    Samvatsara::Bahudhanya,
    Samvatsara::Pramathi,
    Samvatsara::Vikrama,
    Samvatsara::Vrishaprajna,
    Samvatsara::Chitrabhanu,
    Samvatsara::Subhanu,
    Samvatsara::Tarana,
    Samvatsara::Parthiva,
    Samvatsara::Vyaya,
    Samvatsara::Sarvajit,
    Samvatsara::Sarvadhari,
    Samvatsara::Virodhi,
    Samvatsara::Vikriti,
    Samvatsara::Khara,
    Samvatsara::Nandana,
    Samvatsara::Vijaya,
    Samvatsara::Jaya,
    Samvatsara::Manmatha,
    Samvatsara::Durmukha,
    Samvatsara::Hevilambi,
    Samvatsara::Vilambi,
    Samvatsara::Vikari,
    Samvatsara::Sharvari,
    Samvatsara::Plava,
    Samvatsara::Shubhakrit,
    Samvatsara::Shobhakrit,
    Samvatsara::Krodhi,
    Samvatsara::Viswavasu,
    Samvatsara::Parabhava,
    Samvatsara::Plavanga,
    Samvatsara::Keelaka,
    Samvatsara::Saumya,
    Samvatsara::Sadharana,
    Samvatsara::Virodhikrit,
    Samvatsara::Paridhavi,
    Samvatsara::Pramadicha,
    Samvatsara::Ananda,
    Samvatsara::Rakshasa,
    Samvatsara::Nala,
    Samvatsara::Pingala,
    Samvatsara::Kalayukthi,
    Samvatsara::Siddharthi,
    Samvatsara::Raudra,
    Samvatsara::Durmathi,
    Samvatsara::Dundubhi,
    Samvatsara::Rudhirodgari,
    Samvatsara::Raktakshi,
    Samvatsara::Krodhana,
    Samvatsara::Akshaya,
];

impl Samvatsara {
    /// Display name as used in panchang output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prabhava => "Prabhava",
            Self::Vibhava => "Vibhava",
            Self::Shukla => "Shukla",
            Self::Pramoda => "Pramoda",
            Self::Prajotpatti => "Prajotpatti",
            Self::Angirasa => "Angirasa",
            Self::Srimukha => "Srimukha",
            Self::Bhava => "Bhava",
            Self::Yuva => "Yuva",
            Self::Dhatri => "Dhatri",
            Self::Ishvara => "Ishvara",
            Self::Bahudhanya => "Bahudhanya",
            Self::Pramathi => "Pramathi",
            Self::Vikrama => "Vikrama",
            Self::Vrishaprajna => "Vrishaprajna",
            Self::Chitrabhanu => "Chitrabhanu",
            Self::Subhanu => "Subhanu",
            Self::Tarana => "Tarana",
            Self::Parthiva => "Parthiva",
            Self::Vyaya => "Vyaya",
            Self::Sarvajit => "Sarvajit",
            Self::Sarvadhari => "Sarvadhari",
            Self::Virodhi => "Virodhi",
            Self::Vikriti => "Vikriti",
            Self::Khara => "Khara",
            Self::Nandana => "Nandana",
            Self::Vijaya => "Vijaya",
            Self::Jaya => "Jaya",
            Self::Manmatha => "Manmatha",
            Self::Durmukha => "Durmukha",
            Self::Hevilambi => "Hevilambi",
            Self::Vilambi => "Vilambi",
            Self::Vikari => "Vikari",
            Self::Sharvari => "Sharvari",
            Self::Plava => "Plava",
            Self::Shubhakrit => "Shubhakrit",
            Self::Shobhakrit => "Shobhakrit",
            Self::Krodhi => "Krodhi",
            Self::Viswavasu => "Viswavasu",
            Self::Parabhava => "Parabhava",
            Self::Plavanga => "Plavanga",
            Self::Keelaka => "Keelaka",
            Self::Saumya => "Saumya",
            Self::Sadharana => "Sadharana",
            Self::Virodhikrit => "Virodhikrit",
            Self::Paridhavi => "Paridhavi",
            Self::Pramadicha => "Pramadicha",
            Self::Ananda => "Ananda",
            Self::Rakshasa => "Rakshasa",
            Self::Nala => "Nala",
            Self::Pingala => "Pingala",
            Self::Kalayukthi => "Kalayukthi",
            Self::Siddharthi => "Siddharthi",
            Self::Raudra => "Raudra",
            Self::Durmathi => "Durmathi",
            Self::Dundubhi => "Dundubhi",
            Self::Rudhirodgari => "Rudhirodgari",
            Self::Raktakshi => "Raktakshi",
            Self::Krodhana => "Krodhana",
            Self::Akshaya => "Akshaya",
        }
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Entry at `index`, reduced modulo 60.
    pub const fn from_index(index: u32) -> Self {
        ALL_SAMVATSARAS[(index % 60) as usize]
    }

    /// All 60 in order.
    pub const fn all() -> &'static [Samvatsara; 60] {
        &ALL_SAMVATSARAS
    }
}

impl fmt::Display for Samvatsara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Samvatsara {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for Samvatsara {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from_table("samvatsara", s, &ALL_SAMVATSARAS, Self::name)
    }
}

/// Saka year for a Gregorian year/month and the prevailing masa.
pub fn saka_year(ce_year: i32, month: u32, masa: Masa) -> i32 {
    let saka = ce_year - SAKA_OFFSET;
    if month < 4 && masa.index() >= Masa::Pushya.index() {
        saka - 1
    } else {
        saka
    }
}

/// Samvatsara for a Gregorian year/month and the prevailing masa.
///
/// `index = (saka + 11) mod 60`.
pub fn samvatsara_for(ce_year: i32, month: u32, masa: Masa) -> Samvatsara {
    let idx = (saka_year(ce_year, month, masa) + SAMVATSARA_CYCLE_SHIFT).rem_euclid(60);
    Samvatsara::from_index(idx as u32)
}
