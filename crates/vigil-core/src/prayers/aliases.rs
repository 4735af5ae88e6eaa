//! Equivalence of prayer identifiers across languages.
//!
//! Libraries for different languages grew their own identifiers for the
//! same prayer (`ama-namin` in Tagalog, `meie-isa` in Estonian, ...). The
//! alias table maps each of them to one canonical [`PrayerKey`] so lookups
//! never need to know which spelling a language used.

use std::collections::{BTreeSet, HashMap};

use crate::models::PrayerKey;

const DEFAULT_ALIASES: &[(&str, &[&str])] = &[
    ("sign-of-the-cross", &["sign-of-cross", "tanda-ng-krus", "senal-de-la-cruz"]),
    ("confession", &["confiteor", "pagtatapat", "confesion"]),
    ("gloria-patri", &["glory-be", "luwalhati", "au-olgu", "gloria"]),
    ("benedictus", &["song-of-zechariah", "awit-ni-zacarias"]),
    ("magnificat", &["song-of-mary", "awit-ni-maria"]),
    ("nunc-dimittis", &["song-of-simeon", "awit-ni-simeon"]),
    ("apostles-creed", &["creed", "sumasampalataya", "usutunnistus", "credo"]),
    ("lords-prayer", &["our-father", "ama-namin", "meie-isa", "padre-nuestro"]),
    ("st-michael", &["st-michael-prayer", "san-miguel", "panalangin-kay-san-miguel"]),
];

/// Multimap from canonical key to the aliases languages use for it.
#[derive(Debug, Clone, Default)]
pub struct PrayerAliases {
    by_canonical: HashMap<PrayerKey, BTreeSet<String>>,
    by_alias: HashMap<String, PrayerKey>,
}

impl PrayerAliases {
    /// An empty table: every key is its own canonical form.
    pub fn new() -> Self {
        Self::default()
    }

    /// The aliases known for the office prayers in the bundled languages.
    pub fn with_defaults() -> Self {
        let mut aliases = Self::new();
        for (canonical, names) in DEFAULT_ALIASES {
            for name in *names {
                aliases.insert(PrayerKey::new(canonical), name);
            }
        }
        aliases
    }

    /// Registers `alias` as another name for `canonical`.
    ///
    /// An alias belongs to one canonical key only; registering it again
    /// moves it.
    pub fn insert(&mut self, canonical: PrayerKey, alias: &str) {
        let alias = alias.trim().to_ascii_lowercase();
        if alias.is_empty() || alias == canonical.as_str() {
            return;
        }
        if let Some(previous) = self.by_alias.insert(alias.clone(), canonical.clone()) {
            if let Some(set) = self.by_canonical.get_mut(&previous) {
                set.remove(&alias);
            }
        }
        self.by_canonical.entry(canonical).or_default().insert(alias);
    }

    /// Canonical key for any identifier; unknown identifiers map to themselves.
    pub fn canonicalize(&self, id: &str) -> PrayerKey {
        let id = id.trim().to_ascii_lowercase();
        match self.by_alias.get(&id) {
            Some(canonical) => canonical.clone(),
            None => PrayerKey::new(id),
        }
    }

    /// Whether `id` is a registered alias rather than a canonical key.
    pub fn is_alias(&self, id: &str) -> bool {
        self.by_alias.contains_key(&id.trim().to_ascii_lowercase())
    }

    /// Aliases registered for a canonical key, sorted.
    pub fn aliases_of(&self, canonical: &PrayerKey) -> Vec<&str> {
        self.by_canonical
            .get(canonical)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether two identifiers name the same prayer.
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        self.canonicalize(a) == self.canonicalize(b)
    }
}
