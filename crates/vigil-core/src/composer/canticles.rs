//! Canticles sung after the first and second readings.

use crate::models::{PrayerKey, TimeOfDay};

/// The two canticles of an office.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanticlePair {
    /// Sung after the first reading
    pub first: PrayerKey,
    /// Sung after the second reading
    pub second: PrayerKey,
}

/// Canticles appointed for an hour.
pub fn canticles_for(time_of_day: TimeOfDay) -> CanticlePair {
    let (first, second) = match time_of_day {
        TimeOfDay::Morning => (PrayerKey::BENEDICTUS, PrayerKey::GLORIA_PATRI),
        TimeOfDay::Noon => (PrayerKey::GLORIA_PATRI, PrayerKey::GLORIA_PATRI),
        TimeOfDay::Evening => (PrayerKey::MAGNIFICAT, PrayerKey::NUNC_DIMITTIS),
        TimeOfDay::Family => (PrayerKey::NUNC_DIMITTIS, PrayerKey::GLORIA_PATRI),
    };
    CanticlePair { first, second }
}

/// English display name of a canticle, used when no translation exists.
pub(crate) fn canticle_name(key: &PrayerKey) -> &'static str {
    match key.as_str() {
        "benedictus" => "Benedictus (Song of Zechariah)",
        "magnificat" => "Magnificat (Song of Mary)",
        "nunc-dimittis" => "Nunc Dimittis (Song of Simeon)",
        "gloria-patri" => "Gloria Patri",
        _ => "Canticle",
    }
}
