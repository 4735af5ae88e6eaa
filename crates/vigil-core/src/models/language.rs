//! Language codes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

const ENGLISH: &str = "en";

/// Normalized language code: the lowercase primary subtag of a BCP 47 tag.
///
/// Any code is accepted. A language without data is not an error, it just
/// falls back to English when texts are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Language(String);

impl Language {
    /// Builds a language from a tag such as `en`, `en-US` or `tl_PH`.
    ///
    /// Blank tags normalize to English.
    pub fn new(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if primary.is_empty() {
            Self::english()
        } else {
            Self(primary)
        }
    }

    /// The universal fallback language.
    pub fn english() -> Self {
        Self(ENGLISH.to_string())
    }

    pub fn is_english(&self) -> bool {
        self.0 == ENGLISH
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Self::new(&tag)
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_region_and_case() {
        assert_eq!(Language::new("en-US").code(), "en");
        assert_eq!(Language::new("TL_ph").code(), "tl");
        assert_eq!(Language::new(" Et ").code(), "et");
    }

    #[test]
    fn test_blank_is_english() {
        assert!(Language::new("").is_english());
        assert!(Language::new("  ").is_english());
        assert!(Language::default().is_english());
    }

    #[test]
    fn test_unknown_codes_are_kept() {
        let lang = Language::new("xx");
        assert_eq!(lang.to_string(), "xx");
        assert!(!lang.is_english());
    }

    #[test]
    fn test_serde_normalizes() {
        let lang: Language = serde_json::from_str("\"es-MX\"").unwrap();
        assert_eq!(lang.code(), "es");
        assert_eq!(serde_json::to_string(&lang).unwrap(), "\"es\"");
    }
}
