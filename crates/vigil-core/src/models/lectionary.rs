//! Lectionary entries.

use serde::{Deserialize, Serialize};

/// The four scripture references appointed for a day.
///
/// Supplied by the lectionary and never modified by the composer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LectionaryEntry {
    pub first_reading: String,
    pub psalm: String,
    #[serde(default)]
    pub second_reading: String,
    pub gospel: String,
}

impl LectionaryEntry {
    pub fn new(
        first_reading: impl Into<String>,
        psalm: impl Into<String>,
        second_reading: impl Into<String>,
        gospel: impl Into<String>,
    ) -> Self {
        Self {
            first_reading: first_reading.into(),
            psalm: psalm.into(),
            second_reading: second_reading.into(),
            gospel: gospel.into(),
        }
    }

    /// Whether all four references are present.
    pub fn is_complete(&self) -> bool {
        [
            &self.first_reading,
            &self.psalm,
            &self.second_reading,
            &self.gospel,
        ]
        .iter()
        .all(|reference| !reference.trim().is_empty())
    }
}
