//! Panchang element classification from sidereal longitudes.
//!
//! This crate provides:
//! - Fixed-ayanamsha tropical → sidereal conversion
//! - Tithi/Paksha, Nakshatra, Yoga and Karana classifiers
//! - Rashi, Masa (with the adhika rule), Samvatsara, Ritu, Ayana and Vaar
//! - Rahukala/Yamaganda octants and festival tags
//! - Name lookup tables with spelling normalization
//!
//! Every classifier reduces its index modulo the table length, so no
//! input longitude can produce an out-of-range lookup.

pub mod ayanamsha;
pub mod calendar;
pub mod error;
pub mod kaala;
pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod names;
pub mod rashi;
pub mod samvatsara;
pub mod tithi;
pub mod util;
pub mod yoga;

pub use ayanamsha::{Ayanamsha, DEFAULT_AYANAMSHA_DEG};
pub use calendar::{
    ALL_RITUS, ALL_VAARS, Ayana, Festival, Ritu, Vaar, ayana_from_sidereal_longitude,
    festival_for_tithi, ritu_from_masa, vaar_from_weekday,
};
pub use error::NameError;
pub use kaala::{
    KaalaInterval, KaalaPair, RAHU_OCTANTS, YAMA_OCTANTS, kaala_intervals, rahu_kala, yamaganda,
};
pub use karana::{
    ALL_KARANAS, KARANA_SEGMENT_DEG, Karana, KaranaPosition, karana_from_sequence,
    karana_from_tithi_float,
};
pub use masa::{ALL_MASAS, Masa, MasaResolution, masa_from_rashi_index, resolve_masa};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use names::{fold_name, name_matches};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, rashi_from_longitude};
pub use samvatsara::{ALL_SAMVATSARAS, Samvatsara, saka_year, samvatsara_for};
pub use tithi::{
    ALL_PAKSHAS, ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiPosition, elongation_deg,
    tithi_from_elongation,
};
pub use util::{normalize_360, normalize_to_pm180};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaPosition, yoga_from_longitudes, yoga_from_sum};
