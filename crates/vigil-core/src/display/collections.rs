//! Collection wrapper types for displaying groups of dates.

use std::{fmt, ops::Index};

/// Newtype wrapper for displaying the dates a lectionary covers.
///
/// # Examples
///
/// ```rust
/// use vigil_core::display::EntryDates;
///
/// let dates = EntryDates(vec!["2025-11-30".to_string(), "2025-12-07".to_string()]);
/// let output = format!("{}", dates);
/// assert!(output.contains("- 2025-12-07"));
/// assert_eq!(dates.len(), 2);
/// ```
pub struct EntryDates(pub Vec<String>);

impl EntryDates {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of dates in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the dates.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl Index<usize> for EntryDates {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for EntryDates {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<String>> for EntryDates {
    fn from(dates: Vec<String>) -> Self {
        Self(dates)
    }
}

impl fmt::Display for EntryDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No lectionary entries.");
        }

        writeln!(f, "# Lectionary Dates ({})", self.0.len())?;
        writeln!(f)?;
        for date in &self.0 {
            writeln!(f, "- {date}")?;
        }
        Ok(())
    }
}
