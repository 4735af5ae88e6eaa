//! Result wrapper types for displaying calendar lookups.

use std::fmt;

use serde::Serialize;

use super::datetime::LongDate;
use crate::models::{CalendarDate, LiturgicalColor, LiturgicalSeason};

/// The season and color of a single date.
///
/// # Examples
///
/// ```rust
/// use vigil_core::{calendar, display::SeasonReport, models::CalendarDate};
///
/// let date: CalendarDate = "2024-12-31".parse()?;
/// let report = SeasonReport::new(date, calendar::classify(date));
/// let output = format!("{}", report);
/// assert!(output.contains("- Season: Christmas"));
/// assert!(output.contains("- Color: gold"));
/// # Ok::<(), vigil_core::VigilError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonReport {
    pub date: CalendarDate,
    pub season: LiturgicalSeason,
    pub color: LiturgicalColor,
}

impl SeasonReport {
    pub fn new(date: CalendarDate, season: LiturgicalSeason) -> Self {
        Self {
            date,
            season,
            color: season.color(),
        }
    }
}

impl fmt::Display for SeasonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", LongDate(&self.date))?;
        writeln!(f)?;
        writeln!(f, "- Season: {}", self.season.name())?;
        writeln!(f, "- Color: {}", self.color)
    }
}

/// Whether the lectionary has an entry for a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCheck {
    pub date: CalendarDate,
    pub has_entry: bool,
}

impl EntryCheck {
    pub fn new(date: CalendarDate, has_entry: bool) -> Self {
        Self { date, has_entry }
    }
}

impl fmt::Display for EntryCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_entry {
            writeln!(f, "Lectionary entry found for {}.", self.date)
        } else {
            writeln!(f, "No lectionary entry for {}.", self.date)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_report() {
        let date = CalendarDate::new(2025, 6, 8).unwrap();
        let report = SeasonReport::new(date, LiturgicalSeason::Ordinary);
        assert_eq!(report.color, LiturgicalColor::Green);
        assert_eq!(
            report.to_string(),
            "# Sunday, June 8, 2025\n\n- Season: Ordinary Time\n- Color: green\n"
        );
    }

    #[test]
    fn test_season_report_json() {
        let date = CalendarDate::new(2025, 3, 5).unwrap();
        let json = serde_json::to_value(SeasonReport::new(date, LiturgicalSeason::Lent)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"date": "2025-03-05", "season": "lent", "color": "purple"})
        );
    }

    #[test]
    fn test_entry_check() {
        let date = CalendarDate::new(2025, 11, 30).unwrap();
        assert!(EntryCheck::new(date, true).to_string().contains("found"));
        assert_eq!(
            EntryCheck::new(date, false).to_string(),
            "No lectionary entry for 2025-11-30.\n"
        );
    }
}
