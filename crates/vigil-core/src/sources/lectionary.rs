//! Lectionary lookup.

use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use super::read_json;
use crate::{
    error::Result,
    models::{CalendarDate, LectionaryEntry},
};

/// Read-only table of scripture readings by date.
pub trait Lectionary {
    /// Entry appointed for `date`, if the table covers it.
    fn get(&self, date: CalendarDate) -> Option<&LectionaryEntry>;

    /// Every date with an entry, in ascending order.
    fn dates(&self) -> Vec<CalendarDate>;
}

/// Lectionary held in memory, usually loaded from a JSON object keyed by
/// ISO date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLectionary {
    entries: BTreeMap<CalendarDate, LectionaryEntry>,
}

impl StaticLectionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: CalendarDate, entry: LectionaryEntry) {
        self.entries.insert(date, entry);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_entry(mut self, date: CalendarDate, entry: LectionaryEntry) -> Self {
        self.insert(date, entry);
        self
    }

    /// Builds a lectionary from entries keyed by ISO date strings.
    ///
    /// # Errors
    ///
    /// Returns `VigilError::InvalidDate` if any key is not a
    /// valid `YYYY-MM-DD` date.
    pub fn from_iso_map(raw: HashMap<String, LectionaryEntry>) -> Result<Self> {
        let entries = raw
            .into_iter()
            .map(|(date, entry)| -> Result<(CalendarDate, LectionaryEntry)> {
                Ok((date.parse()?, entry))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self { entries })
    }

    /// Parses a JSON object of `date -> entry`.
    ///
    /// # Errors
    ///
    /// Returns `VigilError::Serialization` for malformed JSON and
    /// `VigilError::InvalidDate` for a malformed date key.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_iso_map(serde_json::from_str(json)?)
    }

    /// Loads a lectionary from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `VigilError::FileSystem` if the file cannot be read, plus the
    /// errors of [`from_json_str`](Self::from_json_str).
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_iso_map(read_json(path)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lectionary for StaticLectionary {
    fn get(&self, date: CalendarDate) -> Option<&LectionaryEntry> {
        self.entries.get(&date)
    }

    fn dates(&self) -> Vec<CalendarDate> {
        self.entries.keys().copied().collect()
    }
}
