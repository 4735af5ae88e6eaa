//! Read-only collaborators the composer draws on.
//!
//! The composer only sees the [`Lectionary`] and [`Localizer`] traits (plus
//! [`crate::prayers::PrayerLibrary`]), so callers can back them with
//! whatever storage they like. The in-memory implementations here load from
//! the JSON files of a [`DataDir`].

mod data_dir;
mod lectionary;
mod localization;

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

pub use data_dir::{DataDir, LoadedData};
pub use lectionary::{Lectionary, StaticLectionary};
pub use localization::{localize, Catalog, Catalogs, Localizer, NoLocalization};

use crate::error::{Result, VigilError};

/// Reads and deserializes a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| VigilError::file_system(path, e))?;
    Ok(serde_json::from_str(&contents)?)
}
