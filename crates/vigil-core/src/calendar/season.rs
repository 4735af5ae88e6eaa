//! Season classification.

use super::computus::YearBoundaries;
use crate::models::{CalendarDate, LiturgicalColor, LiturgicalSeason};

/// Classifies a date into exactly one liturgical season.
///
/// Windows are checked in a fixed priority order and the first match wins:
///
/// 1. Christmas, either the window spilling over from last December or the
///    one starting this December
/// 2. Advent, `[first Sunday of Advent, Dec 25)`
/// 3. Lent, `[Ash Wednesday, Easter)`
/// 4. Easter, `[Easter, Pentecost)`
/// 5. Ordinary Time otherwise
///
/// Christmas is tested before Advent so the December 25 boundary can never
/// be claimed by both. Pentecost itself and January 6 fall in Ordinary Time.
pub fn classify(date: CalendarDate) -> LiturgicalSeason {
    YearBoundaries::for_year(date.year()).classify(date)
}

/// Classifies a date string, falling back to today when it does not parse.
///
/// Reachable from user-driven input, so it never fails.
pub fn classify_str(date: &str) -> LiturgicalSeason {
    let date = date.parse::<CalendarDate>().unwrap_or_else(|err| {
        log::warn!("{err}; classifying today instead");
        CalendarDate::today()
    });
    classify(date)
}

/// Liturgical color for a season.
pub fn color_of(season: LiturgicalSeason) -> LiturgicalColor {
    season.color()
}

impl YearBoundaries {
    /// Classifies a date against this year's windows.
    ///
    /// Only meaningful for dates in `self.year`; use [`classify`] otherwise.
    /// Within the year every date from Christmas Day on is Christmas, which
    /// also holds for the last supported year where January 6 of the next
    /// year cannot be represented.
    pub fn classify(&self, date: CalendarDate) -> LiturgicalSeason {
        if self.christmas_spillover().contains(date) || date >= self.christmas {
            LiturgicalSeason::Christmas
        } else if self.advent().contains(date) {
            LiturgicalSeason::Advent
        } else if self.lent().contains(date) {
            LiturgicalSeason::Lent
        } else if self.easter_season().contains(date) {
            LiturgicalSeason::Easter
        } else {
            LiturgicalSeason::Ordinary
        }
    }
}
