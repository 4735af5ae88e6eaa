//! Parameter structures for Vigil operations
//!
//! This module contains shared parameter structures that interface layers
//! (the CLI today) fill from raw user input. They carry plain strings and
//! have no framework-specific derives; each provides a `validate()` that
//! turns the raw values into domain types before the calendar or composer is
//! reached.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Domain Types   │
//! │  (clap derives) │───▶│  (raw strings)  │───▶│  (validated)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers convert their argument structs with `From`:
//!
//! ```ignore
//! impl From<OfficeArgs> for BuildDevotion {
//!     fn from(args: OfficeArgs) -> Self {
//!         BuildDevotion {
//!             date: args.date,
//!             time_of_day: args.time,
//!             language: None,
//!         }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, VigilError},
    models::{CalendarDate, Language, TimeOfDay},
};

/// Year range accepted for calendar computations.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = -9999..=9999;

fn parse_date(field: &str, raw: &str) -> Result<CalendarDate> {
    if raw.trim().is_empty() {
        return Err(VigilError::invalid_input(field).with_reason("Date must not be empty"));
    }
    raw.parse().map_err(|err: VigilError| {
        VigilError::invalid_input(field).with_reason(format!("{err}. Expected YYYY-MM-DD"))
    })
}

fn parse_language(raw: Option<&str>) -> Language {
    raw.map(Language::new).unwrap_or_default()
}

/// Parameters for building a single office.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildDevotion {
    /// Date in `YYYY-MM-DD` form
    pub date: String,
    /// Hour of prayer ('morning', 'noon', 'evening' or 'family');
    /// defaults to morning
    #[serde(default)]
    pub time_of_day: Option<String>,
    /// Language code; defaults to English
    #[serde(default)]
    pub language: Option<String>,
}

impl BuildDevotion {
    /// Validate and parse the request.
    ///
    /// An unrecognized time of day is not an error: it is logged and morning
    /// is used instead.
    ///
    /// # Errors
    ///
    /// * `VigilError::InvalidInput` - When the date is empty or malformed
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vigil_core::models::TimeOfDay;
    /// use vigil_core::params::BuildDevotion;
    ///
    /// let params = BuildDevotion {
    ///     date: "2025-11-30".to_string(),
    ///     time_of_day: Some("vespers".to_string()),
    ///     language: Some("tl-PH".to_string()),
    /// };
    /// let (date, time, language) = params.validate()?;
    /// assert_eq!(date.iso(), "2025-11-30");
    /// assert_eq!(time, TimeOfDay::Morning);
    /// assert_eq!(language.code(), "tl");
    /// # Ok::<(), vigil_core::VigilError>(())
    /// ```
    pub fn validate(&self) -> Result<(CalendarDate, TimeOfDay, Language)> {
        let date = parse_date("date", &self.date)?;
        let time_of_day = self
            .time_of_day
            .as_deref()
            .map(TimeOfDay::parse_or_default)
            .unwrap_or_default();
        Ok((date, time_of_day, parse_language(self.language.as_deref())))
    }
}

/// Parameters for building all offices of a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildDay {
    /// Date in `YYYY-MM-DD` form
    pub date: String,
    /// Language code; defaults to English
    #[serde(default)]
    pub language: Option<String>,
}

impl BuildDay {
    /// # Errors
    ///
    /// * `VigilError::InvalidInput` - When the date is empty or malformed
    pub fn validate(&self) -> Result<(CalendarDate, Language)> {
        Ok((
            parse_date("date", &self.date)?,
            parse_language(self.language.as_deref()),
        ))
    }
}

/// Parameters for classifying a date; no date means today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyDate {
    #[serde(default)]
    pub date: Option<String>,
}

impl ClassifyDate {
    /// # Errors
    ///
    /// * `VigilError::InvalidInput` - When a date is given but malformed
    pub fn validate(&self) -> Result<CalendarDate> {
        match self.date.as_deref() {
            Some(raw) => parse_date("date", raw),
            None => Ok(CalendarDate::today()),
        }
    }
}

/// Parameters for showing the season boundaries of a year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowYear {
    pub year: i32,
}

impl ShowYear {
    /// # Errors
    ///
    /// * `VigilError::InvalidInput` - When the year is outside -9999..=9999
    pub fn validate(&self) -> Result<i16> {
        if !YEAR_RANGE.contains(&self.year) {
            return Err(VigilError::invalid_input("year").with_reason(format!(
                "Year {} is out of range. Must be between {} and {}",
                self.year,
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            )));
        }
        i16::try_from(self.year)
            .map_err(|err| VigilError::invalid_input("year").with_reason(err.to_string()))
    }
}

/// Parameters for checking whether a date has a lectionary entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckDate {
    pub date: String,
}

impl CheckDate {
    /// # Errors
    ///
    /// * `VigilError::InvalidInput` - When the date is empty or malformed
    pub fn validate(&self) -> Result<CalendarDate> {
        parse_date("date", &self.date)
    }
}
