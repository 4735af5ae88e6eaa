//! Builder for creating and configuring DevotionComposer instances.

use std::path::{Path, PathBuf};

use super::DevotionComposer;
use crate::{
    error::Result,
    models::Language,
    prayers::{PrayerAliases, PrayerLibrary, PrayerResolver},
    sources::{Catalog, Catalogs, DataDir, Lectionary, Localizer, StaticLectionary},
};

type BoxedLectionary = Box<dyn Lectionary + Send + Sync>;
type BoxedLocalizer = Box<dyn Localizer + Send + Sync>;

/// Builder for creating and configuring DevotionComposer instances.
///
/// Collaborators set explicitly take precedence over anything read from the
/// data directory: an explicit lectionary replaces the file, an explicit
/// prayer library replaces the file for its language, and explicit catalog
/// strings override file strings key by key.
pub struct DevotionComposerBuilder {
    data_dir: Option<PathBuf>,
    lectionary: Option<BoxedLectionary>,
    prayers: PrayerResolver,
    catalogs: Catalogs,
    localizer: Option<BoxedLocalizer>,
    aliases: PrayerAliases,
}

impl DevotionComposerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            data_dir: None,
            lectionary: None,
            prayers: PrayerResolver::new(),
            catalogs: Catalogs::new(),
            localizer: None,
            aliases: PrayerAliases::with_defaults(),
        }
    }

    /// Sets a custom data directory.
    ///
    /// If not specified and no lectionary is supplied, uses the XDG Base
    /// Directory specification: `$XDG_DATA_HOME/vigil/` or
    /// `~/.local/share/vigil/`. A missing default directory is not an error.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    pub fn with_lectionary<L>(mut self, lectionary: L) -> Self
    where
        L: Lectionary + Send + Sync + 'static,
    {
        self.lectionary = Some(Box::new(lectionary));
        self
    }

    pub fn with_prayer_library<L>(mut self, language: Language, library: L) -> Self
    where
        L: PrayerLibrary + Send + Sync + 'static,
    {
        self.prayers.insert_library(language, library);
        self
    }

    /// Adds localized strings for a language.
    pub fn with_catalog(mut self, language: Language, catalog: Catalog) -> Self {
        self.catalogs.extend(language, catalog);
        self
    }

    /// Replaces string catalogs entirely with a custom localizer.
    pub fn with_localizer<L>(mut self, localizer: L) -> Self
    where
        L: Localizer + Send + Sync + 'static,
    {
        self.localizer = Some(Box::new(localizer));
        self
    }

    /// Sets the alias table applied to prayer libraries read from files.
    pub fn with_aliases(mut self, aliases: PrayerAliases) -> Self {
        self.aliases = aliases;
        self
    }

    /// Builds the configured composer.
    ///
    /// # Errors
    ///
    /// Returns `VigilError::Configuration` if an explicit data directory does
    /// not exist, `VigilError::FileSystem` if a data file cannot be read and
    /// `VigilError::Serialization` or `VigilError::InvalidDate` if a data
    /// file is malformed.
    pub fn build(self) -> Result<DevotionComposer> {
        let data_dir = match self.data_dir {
            Some(path) => Some(DataDir::new(path)),
            None if self.lectionary.is_none() => {
                let discovered = DataDir::discover();
                if discovered.is_none() {
                    log::info!("No data directory found; starting with an empty lectionary");
                }
                discovered
            }
            None => None,
        };

        let mut prayers = self.prayers;
        let mut file_catalogs = Catalogs::new();
        let mut file_lectionary = None;

        if let Some(data_dir) = data_dir {
            log::debug!("Loading data from {}", data_dir.root().display());
            let loaded = data_dir.load(&self.aliases)?;
            file_lectionary = loaded.lectionary;
            for (language, library) in loaded.prayers {
                if !prayers.has_language(&language) {
                    prayers.insert_library(language, library);
                }
            }
            file_catalogs = loaded.catalogs;
        }

        let lectionary = match self.lectionary {
            Some(lectionary) => lectionary,
            None => Box::new(file_lectionary.unwrap_or_else(StaticLectionary::new)),
        };

        let localizer = match self.localizer {
            Some(localizer) => localizer,
            None => {
                file_catalogs.merge(self.catalogs);
                Box::new(file_catalogs)
            }
        };

        Ok(DevotionComposer {
            lectionary,
            prayers,
            localizer,
        })
    }
}

impl Default for DevotionComposerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
