//! Karana (half-tithi) classification.
//!
//! Each tithi has two karanas, 60 per synodic month. Seven movable karanas
//! repeat eight times over sequence 1..=57; four fixed karanas occupy the
//! remaining slots: Kimstughna at 0, Shakuni at 58, Chatushpada at 59 and
//! Naga at 60.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::NameError;
use crate::names::parse_from_table;

/// Elongation span of one karana in degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Number of movable karanas.
pub const MOVABLE_KARANA_COUNT: u32 = 7;

/// The 11 karanas: 7 movable followed by 4 fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garija,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// All 11 in order (index 0 = Bava .. 6 = Vishti, 7 = Shakuni .. 10 = Kimstughna).
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garija,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

impl Karana {
    /// Display name as used in panchang output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garija => "Garija",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti (Bhadra)",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Entry at `index`, reduced modulo 11.
    pub const fn from_index(index: u32) -> Self {
        ALL_KARANAS[(index % 11) as usize]
    }

    /// All 11 in order.
    pub const fn all() -> &'static [Karana; 11] {
        &ALL_KARANAS
    }
}

impl fmt::Display for Karana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Karana {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for Karana {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from_table("karana", s, &ALL_KARANAS, Self::name)
    }
}

impl Karana {
    /// Whether this karana belongs to the repeating movable set.
    pub const fn is_movable(self) -> bool {
        self.index() < MOVABLE_KARANA_COUNT as u8
    }
}

/// Karana position derived from a tithi count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KaranaPosition {
    /// The karana.
    pub karana: Karana,
    /// Sequence number within the synodic month, `floor(tithi_float * 2)`.
    pub sequence: u32,
}

/// Karana for a sequence number `k = floor(tithi_float * 2)`.
pub const fn karana_from_sequence(k: u32) -> Karana {
    match k {
        0 => Karana::Kimstughna,
        58 => Karana::Shakuni,
        59 => Karana::Chatushpada,
        k if k >= 60 => Karana::Naga,
        k => Karana::from_index((k - 1) % MOVABLE_KARANA_COUNT),
    }
}

/// Classify a continuous tithi count (elongation / 12) into a karana.
pub fn karana_from_tithi_float(tithi_float: f64) -> KaranaPosition {
    let sequence = (tithi_float.max(0.0) * 2.0).floor() as u32;
    KaranaPosition {
        karana: karana_from_sequence(sequence),
        sequence,
    }
}
