//! Types for panchang results.

use chrono::NaiveDate;
use panchangam_base::{
    Ayana, Festival, Karana, Masa, Nakshatra, Paksha, Rashi, Ritu, Samvatsara, Tithi, Vaar, Yoga,
};
use panchangam_time::UtcTime;
use serde::Serialize;

/// Masa (lunar month) resolution with its bracketing new moons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasaInfo {
    /// The masa (lunar month).
    pub masa: Masa,
    /// Whether this is an adhika (intercalary) month.
    pub adhika: bool,
    /// Start of the masa (previous new moon).
    pub start: UtcTime,
    /// End of the masa (next new moon).
    pub end: UtcTime,
    /// Sun's sidereal rashi at the opening new moon.
    pub rashi_at_start: Rashi,
    /// Sun's sidereal rashi at the closing new moon.
    pub rashi_at_end: Rashi,
}

impl MasaInfo {
    /// `Adhika Shravana`, `Kartika`, ...
    pub fn display_name(&self) -> String {
        self.masa.display_name(self.adhika)
    }
}

/// Sunrise, sunset and moonrise as local wall-clock text or the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SunCycle {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
}

/// Calendar attributes of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attributes {
    pub samvatsara: Samvatsara,
    pub ayana: Ayana,
    pub ritu: Ritu,
    pub maasa: Masa,
    pub is_adhika: bool,
    pub paksha: Paksha,
    pub tithi: Tithi,
    pub nakshatra: Nakshatra,
    pub yoga: Yoga,
    pub karana: Karana,
    pub vasara: Vaar,
}

/// Rahukala and Yamaganda as `hh:mm AM - hh:mm PM` or the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inauspicious {
    pub rahu: String,
    pub yama: String,
}

/// Complete panchang for one civil date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanchangSnapshot {
    pub date: NaiveDate,
    pub sun_cycle: SunCycle,
    pub attributes: Attributes,
    pub inauspicious: Inauspicious,
    pub festival: Option<Festival>,
    pub description: String,
}

impl PanchangSnapshot {
    /// Whether any time field holds `sentinel` instead of a clock reading.
    pub fn is_partial(&self, sentinel: &str) -> bool {
        [
            &self.sun_cycle.sunrise,
            &self.sun_cycle.sunset,
            &self.sun_cycle.moonrise,
            &self.inauspicious.rahu,
            &self.inauspicious.yama,
        ]
        .into_iter()
        .any(|s| s == sentinel)
    }

    /// Masa name with the `Adhika ` prefix for leap months.
    pub fn formatted_masa(&self) -> String {
        self.attributes.maasa.display_name(self.attributes.is_adhika)
    }
}

/// Sankalpa-style line naming the year, half-year, season, month,
/// fortnight and lunar day.
pub fn sanskrit_description(attrs: &Attributes) -> String {
    format!(
        "Shubhe Shobhane Muhurthe {} Nama Samvatsare {} {} Ritau {} Mase {} Pakshe {} Tithau",
        attrs.samvatsara, attrs.ayana, attrs.ritu, attrs.maasa, attrs.paksha, attrs.tithi
    )
}

/// Single-level view of a [`PanchangSnapshot`] for consumers of the
/// older flat layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatPanchang {
    pub maasa: Masa,
    pub is_adhika: bool,
    pub paksha: Paksha,
    pub tithi: Tithi,
    pub nakshatra: Nakshatra,
    pub yoga: Yoga,
    pub karana: Karana,
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub rahukala: String,
    pub yamaganda: String,
    /// `[Adhika ]{masa} {paksha} {tithi}`
    pub description: String,
    pub formatted_masa: String,
}

impl From<&PanchangSnapshot> for FlatPanchang {
    fn from(s: &PanchangSnapshot) -> Self {
        let a = &s.attributes;
        let formatted_masa = s.formatted_masa();
        Self {
            maasa: a.maasa,
            is_adhika: a.is_adhika,
            paksha: a.paksha,
            tithi: a.tithi,
            nakshatra: a.nakshatra,
            yoga: a.yoga,
            karana: a.karana,
            sunrise: s.sun_cycle.sunrise.clone(),
            sunset: s.sun_cycle.sunset.clone(),
            moonrise: s.sun_cycle.moonrise.clone(),
            rahukala: s.inauspicious.rahu.clone(),
            yamaganda: s.inauspicious.yama.clone(),
            description: format!("{formatted_masa} {} {}", a.paksha, a.tithi),
            formatted_masa,
        }
    }
}
