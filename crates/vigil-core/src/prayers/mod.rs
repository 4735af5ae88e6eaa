//! Prayer texts and their cross-language fallback.
//!
//! A [`PrayerResolver`] holds one [`PrayerLibrary`] per language and turns a
//! canonical [`PrayerKey`] into display text. Resolution never fails: it
//! walks the requested language, then English, then the built-in canonical
//! English texts, and returns an empty string only when a key is unknown
//! everywhere.

mod aliases;
mod builtin;

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    path::Path,
};

use serde::{Deserialize, Serialize};

pub use aliases::PrayerAliases;
pub use builtin::{builtin_text, BUILTIN_KEYS};

use crate::{
    error::Result,
    models::{Language, PrayerKey},
    sources::read_json,
};

/// Read-only prayer texts for a single language.
pub trait PrayerLibrary {
    /// Text stored for `key`, if any.
    fn get(&self, key: &PrayerKey) -> Option<&str>;
}

impl PrayerLibrary for HashMap<PrayerKey, String> {
    fn get(&self, key: &PrayerKey) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

/// In-memory prayer library, usually loaded from a JSON object of
/// `identifier -> text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLibrary {
    texts: HashMap<PrayerKey, String>,
}

impl TextLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a text.
    pub fn insert(&mut self, key: PrayerKey, text: impl Into<String>) {
        self.texts.insert(key, text.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_text(mut self, key: PrayerKey, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Adds every text of `other`, replacing texts already present.
    pub fn merge(&mut self, other: TextLibrary) {
        self.texts.extend(other.texts);
    }

    /// Builds a library from raw identifiers, rewriting aliases to canonical
    /// keys.
    ///
    /// When a library carries both an alias and the canonical key, the
    /// canonical entry wins. Among several aliases of one key the
    /// alphabetically first identifier wins.
    pub fn from_entries<I, K, V>(entries: I, aliases: &PrayerAliases) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let sorted: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(id, text)| (id.as_ref().to_string(), text.into()))
            .collect();

        let mut canonical = Vec::new();
        let mut library = Self::new();
        for (id, text) in sorted {
            if !aliases.is_alias(&id) {
                canonical.push((PrayerKey::new(id), text));
                continue;
            }
            let key = aliases.canonicalize(&id);
            if library.texts.contains_key(&key) {
                log::warn!("Ignoring '{id}': another alias of '{key}' is already loaded");
                continue;
            }
            library.texts.insert(key, text);
        }
        for (key, text) in canonical {
            library.texts.insert(key, text);
        }
        library
    }

    /// Parses a JSON object of `identifier -> text`.
    ///
    /// # Errors
    ///
    /// Returns `VigilError::Serialization` when the JSON is malformed.
    pub fn from_json_str(json: &str, aliases: &PrayerAliases) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw, aliases))
    }

    /// Loads a library from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `VigilError::FileSystem` if the file cannot be read and
    /// `VigilError::Serialization` if it is not a JSON string map.
    pub fn load(path: &Path, aliases: &PrayerAliases) -> Result<Self> {
        let raw: HashMap<String, String> = read_json(path)?;
        Ok(Self::from_entries(raw, aliases))
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl PrayerLibrary for TextLibrary {
    fn get(&self, key: &PrayerKey) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }
}

/// Which tier of the fallback chain produced a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSource {
    /// The requested language's library
    Requested,
    /// The English library
    English,
    /// The built-in canonical English text
    BuiltIn,
    /// Nothing matched; the text is empty
    Missing,
}

/// A resolved text together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedText {
    pub text: String,
    pub source: TextSource,
}

type BoxedLibrary = Box<dyn PrayerLibrary + Send + Sync>;

/// Resolves prayer texts through the language fallback chain.
#[derive(Default)]
pub struct PrayerResolver {
    libraries: HashMap<Language, BoxedLibrary>,
}

impl PrayerResolver {
    /// A resolver with no libraries; only built-in texts resolve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the library for a language, replacing any previous one.
    pub fn insert_library<L>(&mut self, language: Language, library: L)
    where
        L: PrayerLibrary + Send + Sync + 'static,
    {
        self.libraries.insert(language, Box::new(library));
    }

    /// Builder-style [`insert_library`](Self::insert_library).
    pub fn with_library<L>(mut self, language: Language, library: L) -> Self
    where
        L: PrayerLibrary + Send + Sync + 'static,
    {
        self.insert_library(language, library);
        self
    }

    /// Languages with a registered library, sorted.
    pub fn languages(&self) -> Vec<&Language> {
        let mut languages: Vec<&Language> = self.libraries.keys().collect();
        languages.sort();
        languages
    }

    pub fn has_language(&self, language: &Language) -> bool {
        self.libraries.contains_key(language)
    }

    /// Display text for `key` in `language`.
    ///
    /// Returns an empty string when no tier knows the key.
    pub fn resolve(&self, key: &PrayerKey, language: &Language) -> String {
        self.resolve_with_source(key, language).text
    }

    /// Like [`resolve`](Self::resolve) but also reports the tier used.
    pub fn resolve_with_source(&self, key: &PrayerKey, language: &Language) -> ResolvedText {
        if let Some(text) = self.lookup(key, language) {
            return ResolvedText {
                text: text.to_string(),
                source: TextSource::Requested,
            };
        }

        let english = Language::english();
        if !language.is_english() {
            if let Some(text) = self.lookup(key, &english) {
                log::debug!("Prayer '{key}' missing in '{language}', using English library");
                return ResolvedText {
                    text: text.to_string(),
                    source: TextSource::English,
                };
            }
        }

        if let Some(text) = builtin_text(key) {
            log::debug!("Prayer '{key}' missing in '{language}' and English, using built-in text");
            return ResolvedText {
                text: text.to_string(),
                source: TextSource::BuiltIn,
            };
        }

        log::debug!("Prayer '{key}' not found in any tier");
        ResolvedText {
            text: String::new(),
            source: TextSource::Missing,
        }
    }

    /// Non-blank text for `key` in exactly `language`.
    fn lookup(&self, key: &PrayerKey, language: &Language) -> Option<&str> {
        self.libraries
            .get(language)
            .and_then(|library| library.get(key))
            .filter(|text| !text.trim().is_empty())
    }
}

impl fmt::Debug for PrayerResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrayerResolver")
            .field("languages", &self.languages())
            .finish()
    }
}
