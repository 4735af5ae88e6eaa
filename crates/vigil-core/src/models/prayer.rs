//! Canonical prayer identifiers.

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// Stable, language-independent identifier of a prayer text.
///
/// Libraries in every language are keyed by these; per-language aliases
/// (`ama-namin`, `meie-isa`, ...) are rewritten to the canonical key when a
/// library is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrayerKey(Cow<'static, str>);

impl PrayerKey {
    pub const SIGN_OF_THE_CROSS: PrayerKey = PrayerKey::fixed("sign-of-the-cross");
    pub const CONFESSION: PrayerKey = PrayerKey::fixed("confession");
    pub const GLORIA_PATRI: PrayerKey = PrayerKey::fixed("gloria-patri");
    pub const BENEDICTUS: PrayerKey = PrayerKey::fixed("benedictus");
    pub const MAGNIFICAT: PrayerKey = PrayerKey::fixed("magnificat");
    pub const NUNC_DIMITTIS: PrayerKey = PrayerKey::fixed("nunc-dimittis");
    pub const APOSTLES_CREED: PrayerKey = PrayerKey::fixed("apostles-creed");
    pub const LORDS_PRAYER: PrayerKey = PrayerKey::fixed("lords-prayer");
    pub const ST_MICHAEL: PrayerKey = PrayerKey::fixed("st-michael");

    const fn fixed(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// Creates a key from any identifier, normalized to lowercase.
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Cow::Owned(key.as_ref().trim().to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PrayerKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for PrayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
