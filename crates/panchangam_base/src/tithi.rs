//! Tithi (lunar day) and Paksha classification.
//!
//! A tithi is 12 deg of Moon-Sun elongation. Thirty tithis make a synodic
//! month: Shukla (waxing) indices 0-14 ending at Purnima, Krishna (waning)
//! indices 15-29 ending at Amavasya. The same short names repeat in both
//! pakshas, so tithis are not parsed by name; use [`crate::name_matches`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::util::{normalize_360, segment_index};

/// Elongation span of one tithi in degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, new moon to full moon.
    Shukla,
    /// Waning half, full moon to new moon.
    Krishna,
}

/// Both pakshas in order.
pub const ALL_PAKSHAS: [Paksha; 2] = [Paksha::Shukla, Paksha::Krishna];

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

impl fmt::Display for Paksha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Paksha {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl std::str::FromStr for Paksha {
    type Err = crate::error::NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::names::parse_from_table("paksha", s, &ALL_PAKSHAS, Self::name)
    }
}

/// The 30 tithis of a synodic month, Shukla Pratipada first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShasthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShasthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 in order (index 0 = Shukla Pratipada, 14 = Purnima, 29 = Amavasya).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShasthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShasthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

impl Tithi {
    /// Display name as used in panchang output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShuklaPratipada => "Pratipada",
            Self::ShuklaDwitiya => "Dwitiya",
            Self::ShuklaTritiya => "Tritiya",
            Self::ShuklaChaturthi => "Chaturthi",
            Self::ShuklaPanchami => "Panchami",
            Self::ShuklaShasthi => "Shasthi",
            Self::ShuklaSaptami => "Saptami",
            Self::ShuklaAshtami => "Ashtami",
            Self::ShuklaNavami => "Navami",
            Self::ShuklaDashami => "Dashami",
            Self::ShuklaEkadashi => "Ekadashi",
            Self::ShuklaDwadashi => "Dwadashi",
            Self::ShuklaTrayodashi => "Trayodashi",
            Self::ShuklaChaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::KrishnaPratipada => "Pratipada",
            Self::KrishnaDwitiya => "Dwitiya",
            Self::KrishnaTritiya => "Tritiya",
            Self::KrishnaChaturthi => "Chaturthi",
            Self::KrishnaPanchami => "Panchami",
            Self::KrishnaShasthi => "Shasthi",
            Self::KrishnaSaptami => "Saptami",
            Self::KrishnaAshtami => "Ashtami",
            Self::KrishnaNavami => "Navami",
            Self::KrishnaDashami => "Dashami",
            Self::KrishnaEkadashi => "Ekadashi",
            Self::KrishnaDwadashi => "Dwadashi",
            Self::KrishnaTrayodashi => "Trayodashi",
            Self::KrishnaChaturdashi => "Chaturdashi",
            Self::Amavasya => "Amavasya",
        }
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Entry at `index`, reduced modulo 30.
    pub const fn from_index(index: u32) -> Self {
        ALL_TITHIS[(index % 30) as usize]
    }

    /// All 30 in order.
    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

impl fmt::Display for Tithi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Tithi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Tithi {
    /// Paksha this tithi belongs to.
    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based position within the paksha (1-15).
    pub const fn number_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }
}

/// Tithi position derived from an elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    /// The tithi.
    pub tithi: Tithi,
    /// 0-based tithi index (0..29).
    pub tithi_index: u8,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Continuous tithi count, elongation / 12, in [0, 30).
    pub tithi_float: f64,
    /// Degrees elapsed within the current tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify a Moon-Sun elongation `(moon - sun) mod 360` into a tithi.
///
/// The elongation is identical for tropical and sidereal longitudes, since
/// the ayanamsha cancels.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let idx = segment_index(elong, TITHI_SEGMENT_DEG, 30);
    let tithi = Tithi::from_index(idx as u32);
    TithiPosition {
        tithi,
        tithi_index: idx,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.number_in_paksha(),
        tithi_float: elong / TITHI_SEGMENT_DEG,
        degrees_in_tithi: (elong - idx as f64 * TITHI_SEGMENT_DEG).max(0.0),
    }
}

/// Moon-Sun elongation in [0, 360) from the two longitudes in degrees.
pub fn elongation_deg(sun_lon_deg: f64, moon_lon_deg: f64) -> f64 {
    normalize_360(moon_lon_deg - sun_lon_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_tithis() {
        assert_eq!(ALL_TITHIS.len(), 30);
        for (i, t) in ALL_TITHIS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
        }
    }

    #[test]
    fn zero_elongation_is_shukla_pratipada() {
        let p = tithi_from_elongation(0.0);
        assert_eq!(p.tithi, Tithi::ShuklaPratipada);
        assert_eq!(p.tithi.name(), "Pratipada");
        assert_eq!(p.paksha, Paksha::Shukla);
        assert_eq!(p.tithi_in_paksha, 1);
    }

    #[test]
    fn elongation_174_is_purnima() {
        let p = tithi_from_elongation(174.0);
        assert_eq!(p.tithi_index, 14);
        assert_eq!(p.tithi, Tithi::Purnima);
        assert_eq!(p.paksha, Paksha::Shukla);
        assert_eq!(p.tithi_in_paksha, 15);
        assert!((p.tithi_float - 14.5).abs() < 1e-12);
    }

    #[test]
    fn elongation_180_starts_krishna() {
        let p = tithi_from_elongation(180.0);
        assert_eq!(p.tithi, Tithi::KrishnaPratipada);
        assert_eq!(p.paksha, Paksha::Krishna);
        assert_eq!(p.tithi_in_paksha, 1);
    }

    #[test]
    fn last_tithi_is_amavasya() {
        let p = tithi_from_elongation(359.5);
        assert_eq!(p.tithi, Tithi::Amavasya);
        assert_eq!(p.tithi_index, 29);
        assert_eq!(p.tithi_in_paksha, 15);
    }

    #[test]
    fn paksha_rule_holds_everywhere() {
        for i in 0..720 {
            let p = tithi_from_elongation(i as f64 * 0.5);
            assert!(p.tithi_index < 30);
            assert_eq!(p.paksha == Paksha::Shukla, p.tithi_index < 15);
        }
    }

    #[test]
    fn elongation_wraps() {
        assert!((elongation_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((elongation_deg(10.0, 350.0) - 340.0).abs() < 1e-12);
    }

    #[test]
    fn shasthi_spelling() {
        assert_eq!(Tithi::ShuklaShasthi.name(), "Shasthi");
        assert_eq!(Tithi::KrishnaShasthi.name(), "Shasthi");
    }

    #[test]
    fn paksha_parse() {
        assert_eq!("krishna".parse::<Paksha>().unwrap(), Paksha::Krishna);
        assert!("Bahula".parse::<Paksha>().is_err());
    }
}
