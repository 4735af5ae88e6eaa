//! Localized titles and rubrics.

use std::{collections::HashMap, path::Path};

use super::read_json;
use crate::{error::Result, models::Language};

/// Lookup of UI strings by key.
pub trait Localizer {
    /// Translation of `key` in `language`, or `key` itself when missing.
    fn translate<'a>(&'a self, language: &Language, key: &'a str) -> &'a str;
}

/// Translates `key`, using `fallback` whenever the localizer has nothing
/// better than the raw key.
pub fn localize<L>(localizer: &L, language: &Language, key: &str, fallback: &str) -> String
where
    L: Localizer + ?Sized,
{
    let translated = localizer.translate(language, key);
    if translated == key || translated.trim().is_empty() {
        fallback.to_string()
    } else {
        translated.to_string()
    }
}

/// A localizer that knows no strings; every lookup uses its fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalization;

impl Localizer for NoLocalization {
    fn translate<'a>(&'a self, _language: &Language, key: &'a str) -> &'a str {
        key
    }
}

/// Flat string table for one language.
pub type Catalog = HashMap<String, String>;

/// Per-language string tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogs {
    catalogs: HashMap<Language, Catalog>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the strings of `catalog` to `language`, replacing existing keys.
    pub fn extend(&mut self, language: Language, catalog: Catalog) {
        self.catalogs.entry(language).or_default().extend(catalog);
    }

    /// Adds every string of `other`, which wins on conflicting keys.
    pub fn merge(&mut self, other: Catalogs) {
        for (language, catalog) in other.catalogs {
            self.extend(language, catalog);
        }
    }

    /// Builder-style single string insertion.
    pub fn with_string(
        mut self,
        language: Language,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.catalogs
            .entry(language)
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Loads a JSON object of `key -> string` into `language`.
    ///
    /// # Errors
    ///
    /// Returns `VigilError::FileSystem` if the file cannot be read and
    /// `VigilError::Serialization` if it is not a JSON string map.
    pub fn load(&mut self, language: Language, path: &Path) -> Result<()> {
        let catalog: Catalog = read_json(path)?;
        self.extend(language, catalog);
        Ok(())
    }

    pub fn languages(&self) -> Vec<&Language> {
        let mut languages: Vec<&Language> = self.catalogs.keys().collect();
        languages.sort();
        languages
    }
}

impl Localizer for Catalogs {
    fn translate<'a>(&'a self, language: &Language, key: &'a str) -> &'a str {
        self.catalogs
            .get(language)
            .and_then(|catalog| catalog.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalogs() -> Catalogs {
        Catalogs::new()
            .with_string(Language::new("tl"), "devotion.title.morning", "Panalangin sa Umaga")
            .with_string(Language::new("tl"), "devotion.section.creed", "")
    }

    #[test]
    fn test_translate_returns_key_when_missing() {
        let catalogs = create_test_catalogs();
        let tl = Language::new("tl");
        assert_eq!(
            catalogs.translate(&tl, "devotion.title.morning"),
            "Panalangin sa Umaga"
        );
        assert_eq!(catalogs.translate(&tl, "devotion.title.evening"), "devotion.title.evening");
        assert_eq!(
            catalogs.translate(&Language::new("et"), "devotion.title.morning"),
            "devotion.title.morning"
        );
    }

    #[test]
    fn test_localize_never_returns_raw_key() {
        let catalogs = create_test_catalogs();
        let tl = Language::new("tl");
        assert_eq!(
            localize(&catalogs, &tl, "devotion.title.morning", "Morning Prayer"),
            "Panalangin sa Umaga"
        );
        assert_eq!(
            localize(&catalogs, &tl, "devotion.title.evening", "Evening Prayer"),
            "Evening Prayer"
        );
        assert_eq!(
            localize(&catalogs, &tl, "devotion.section.creed", "Apostles' Creed"),
            "Apostles' Creed"
        );
        assert_eq!(
            localize(&NoLocalization, &tl, "anything", "Fallback"),
            "Fallback"
        );
    }

    #[test]
    fn test_extend_merges_strings() {
        let mut catalogs = create_test_catalogs();
        let mut more = Catalog::new();
        more.insert("devotion.title.evening".to_string(), "Panalangin sa Gabi".to_string());
        catalogs.extend(Language::new("tl"), more);

        let tl = Language::new("tl");
        assert_eq!(catalogs.translate(&tl, "devotion.title.evening"), "Panalangin sa Gabi");
        assert_eq!(catalogs.translate(&tl, "devotion.title.morning"), "Panalangin sa Umaga");
        assert_eq!(catalogs.languages(), vec![&tl]);
    }

    #[test]
    fn test_merge_overrides_by_key() {
        let mut catalogs = create_test_catalogs();
        let tl = Language::new("tl");
        catalogs.merge(
            Catalogs::new()
                .with_string(tl.clone(), "devotion.title.morning", "Umaga")
                .with_string(Language::new("et"), "devotion.title.morning", "Hommikupalve"),
        );

        assert_eq!(catalogs.translate(&tl, "devotion.title.morning"), "Umaga");
        assert_eq!(
            catalogs.translate(&Language::new("et"), "devotion.title.morning"),
            "Hommikupalve"
        );
        assert_eq!(catalogs.languages().len(), 2);
    }
}
