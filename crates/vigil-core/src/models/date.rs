//! Civil calendar dates.

use std::{fmt, str::FromStr};

use jiff::{
    civil::{self, Weekday},
    tz::TimeZone,
    ToSpan, Zoned,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VigilError};

/// Largest day count jiff accepts in a single span.
const MAX_SPAN_DAYS: i32 = 7_304_484;

/// A calendar day with no time-of-day and no time zone.
///
/// Built from and broken down into year, month and day components only, so
/// the represented day never shifts with the executing time zone. The ISO
/// `YYYY-MM-DD` form is used for display, parsing and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(civil::Date);

impl CalendarDate {
    /// Creates a date from its calendar components.
    ///
    /// # Errors
    ///
    /// Returns `VigilError::InvalidDate` when the components do not name a
    /// real day (e.g. February 30th) or the year is outside -9999..=9999.
    pub fn new(year: i16, month: i8, day: i8) -> Result<Self> {
        civil::Date::new(year, month, day)
            .map(Self)
            .map_err(|e| VigilError::invalid_date(format!("{year:04}-{month:02}-{day:02}"), e))
    }

    /// Today's date in the system time zone.
    pub fn today() -> Self {
        Self::from_zoned(&Zoned::now())
    }

    /// The civil date of a zoned datetime, as seen in its own time zone.
    pub fn from_zoned(zoned: &Zoned) -> Self {
        Self(zoned.date())
    }

    pub fn year(&self) -> i16 {
        self.0.year()
    }

    pub fn month(&self) -> i8 {
        self.0.month()
    }

    pub fn day(&self) -> i8 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the date `days` days later, saturating at the supported range.
    pub fn add_days(self, days: i32) -> Self {
        let days = days.clamp(-MAX_SPAN_DAYS, MAX_SPAN_DAYS);
        Self(self.0.saturating_add(days.days()))
    }

    /// Returns the date `days` days earlier, saturating at the supported range.
    pub fn sub_days(self, days: i32) -> Self {
        self.add_days(days.saturating_neg())
    }

    /// The next day.
    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    /// Canonical `YYYY-MM-DD` form.
    pub fn iso(&self) -> String {
        self.to_string()
    }

    /// The same civil day at midnight in `tz`, if that instant exists.
    ///
    /// Useful for handing a date to clock-based consumers; the date itself
    /// never passes through this conversion.
    pub fn to_zoned(self, tz: TimeZone) -> Option<Zoned> {
        self.0.to_zoned(tz).ok()
    }

    /// Underlying civil date.
    pub fn as_civil(&self) -> civil::Date {
        self.0
    }

    /// A month/day pair that exists in every year, with the year clamped into
    /// the supported range.
    pub(crate) fn fixed(year: i16, month: i8, day: i8) -> Self {
        let year = year.clamp(civil::Date::MIN.year(), civil::Date::MAX.year());
        Self(civil::date(year, month, day))
    }
}

impl From<civil::Date> for CalendarDate {
    fn from(date: civil::Date) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDate {
    type Err = VigilError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VigilError::invalid_date(s, "empty date"));
        }
        trimmed
            .parse::<civil::Date>()
            .map(Self)
            .map_err(|e| VigilError::invalid_date(s, e))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
