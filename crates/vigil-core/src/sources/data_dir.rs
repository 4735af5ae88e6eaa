//! On-disk data directory.
//!
//! ```text
//! <root>/
//!   lectionary.json        { "YYYY-MM-DD": { firstReading, psalm, secondReading, gospel } }
//!   prayers/<lang>.json    { "<prayer id>": "<text>" }
//!   locales/<lang>.json    { "<string key>": "<string>" }
//! ```
//!
//! Every part is optional; a missing file simply contributes nothing.
//! Files whose names normalize to the same language (`en.json`,
//! `en-US.json`) are merged in path order, so for a shared key the later
//! path wins.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::{Catalogs, StaticLectionary};
use crate::{
    error::{Result, ResultExt, VigilError},
    models::Language,
    prayers::{PrayerAliases, TextLibrary},
};

const APP_PREFIX: &str = "vigil";
const LECTIONARY_FILE: &str = "lectionary.json";
const PRAYERS_DIR: &str = "prayers";
const LOCALES_DIR: &str = "locales";

/// Everything read from a data directory.
#[derive(Debug, Default)]
pub struct LoadedData {
    pub lectionary: Option<StaticLectionary>,
    pub prayers: Vec<(Language, TextLibrary)>,
    pub catalogs: Catalogs,
}

/// A data directory root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locates the data directory following the XDG Base Directory
    /// specification: the first of `$XDG_DATA_HOME/vigil` and
    /// `$XDG_DATA_DIRS/vigil` that holds a lectionary.
    pub fn discover() -> Option<Self> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX)
            .find_data_file(LECTIONARY_FILE)
            .and_then(|file| file.parent().map(Self::new))
    }

    /// The per-user data directory, `$XDG_DATA_HOME/vigil` or
    /// `~/.local/share/vigil`. Nothing is created on disk.
    ///
    /// # Errors
    ///
    /// Returns `VigilError::XdgDirectory` if no home directory is known.
    pub fn user_default() -> Result<Self> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX)
            .get_data_home()
            .map(Self::new)
            .ok_or_else(|| VigilError::XdgDirectory("no home directory found".to_string()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn lectionary_path(&self) -> PathBuf {
        self.root.join(LECTIONARY_FILE)
    }

    pub fn prayers_dir(&self) -> PathBuf {
        self.root.join(PRAYERS_DIR)
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.root.join(LOCALES_DIR)
    }

    /// Reads every data file under the root.
    ///
    /// # Errors
    ///
    /// Returns `VigilError::Configuration` if the root is not a directory,
    /// and the loading errors of the individual files otherwise.
    pub fn load(&self, aliases: &PrayerAliases) -> Result<LoadedData> {
        if !self.root.is_dir() {
            return Err(VigilError::Configuration {
                message: format!("Data directory '{}' does not exist", self.root.display()),
            });
        }

        let mut data = LoadedData::default();

        let lectionary_path = self.lectionary_path();
        if lectionary_path.is_file() {
            let lectionary = StaticLectionary::load(&lectionary_path)?;
            log::info!(
                "Loaded {} lectionary entries from {}",
                lectionary.len(),
                lectionary_path.display()
            );
            data.lectionary = Some(lectionary);
        }

        for (language, path) in language_files(&self.prayers_dir())? {
            let library = TextLibrary::load(&path, aliases)?;
            log::debug!("Loaded {} '{language}' prayers from {}", library.len(), path.display());
            match data.prayers.iter_mut().find(|(known, _)| *known == language) {
                Some((_, existing)) => existing.merge(library),
                None => data.prayers.push((language, library)),
            }
        }

        for (language, path) in language_files(&self.locales_dir())? {
            log::debug!("Loading '{language}' strings from {}", path.display());
            data.catalogs.load(language, &path)?;
        }

        Ok(data)
    }
}

/// `*.json` files of a directory keyed by the language in their stem,
/// sorted by path. A missing directory yields nothing.
fn language_files(dir: &Path) -> Result<Vec<(Language, PathBuf)>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| VigilError::file_system(dir, e))?;
    for entry in entries {
        let path = entry
            .with_context_lazy(|| format!("Reading directory {}", dir.display()))?
            .path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            files.push((Language::new(stem), path));
        }
    }
    files.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(files)
}
