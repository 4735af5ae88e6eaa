//! Easter computation and the season boundaries derived from it.

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::CalendarDate;

/// Days from Ash Wednesday to Easter Sunday.
const ASH_WEDNESDAY_OFFSET: i32 = 46;
/// Days from Easter Sunday to Pentecost.
const PENTECOST_OFFSET: i32 = 49;
/// Days from Christmas Day to Epiphany.
const EPIPHANY_OFFSET: i32 = 12;

/// Date of Easter Sunday in the Gregorian calendar.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher). Results are
/// meaningful from 1583 onwards; earlier years still yield a valid March or
/// April date. Years outside -9999..=9999 are clamped into that range.
pub fn compute_easter(year: i16) -> CalendarDate {
    let y = i32::from(year.clamp(-9999, 9999));

    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    // n is in 114..=149, so month is 3 or 4 and day is 1..=31
    let month = (n / 31) as i8;
    let day = (n % 31 + 1) as i8;
    CalendarDate::fixed(y as i16, month, day)
}

/// First Sunday of Advent: the fourth Sunday before Christmas Day.
///
/// Falls 22 to 28 days before December 25, and exactly 28 days before when
/// Christmas is itself a Sunday.
pub fn first_sunday_of_advent(year: i16) -> CalendarDate {
    let christmas = christmas(year);
    let since_sunday = i32::from(christmas.weekday().to_sunday_zero_offset());
    let back = if christmas.weekday() == Weekday::Sunday {
        28
    } else {
        21 + since_sunday
    };
    christmas.sub_days(back)
}

/// Ash Wednesday for the given Easter Sunday.
pub fn ash_wednesday(easter: CalendarDate) -> CalendarDate {
    easter.sub_days(ASH_WEDNESDAY_OFFSET)
}

/// Pentecost Sunday for the given Easter Sunday.
pub fn pentecost(easter: CalendarDate) -> CalendarDate {
    easter.add_days(PENTECOST_OFFSET)
}

/// Christmas Day of `year`.
pub fn christmas(year: i16) -> CalendarDate {
    CalendarDate::fixed(year, 12, 25)
}

/// Epiphany following the Christmas Day of `year` (January 6 of the next year).
pub fn epiphany_after(christmas: CalendarDate) -> CalendarDate {
    christmas.add_days(EPIPHANY_OFFSET)
}

/// Half-open range of dates `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Every date in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |d| Some(d.succ())).take_while(move |d| *d < end)
    }
}

/// Every season boundary that matters for dates in one calendar year.
///
/// The Christmas season straddles New Year, so a calendar year touches two
/// Christmas windows: the one spilling over from the previous December and
/// the one starting this December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearBoundaries {
    pub year: i16,
    pub easter: CalendarDate,
    pub ash_wednesday: CalendarDate,
    pub pentecost: CalendarDate,
    pub advent_start: CalendarDate,
    pub christmas: CalendarDate,
    /// January 6 of the following year
    pub epiphany_next: CalendarDate,
    /// December 25 of the previous year, or January 1 when the previous
    /// year is out of range
    pub christmas_previous: CalendarDate,
    /// January 6 of this year
    pub epiphany: CalendarDate,
}

impl YearBoundaries {
    pub fn for_year(year: i16) -> Self {
        let easter = compute_easter(year);
        let christmas = christmas(year);
        // Stepping back from January 1 avoids naming year - 1 directly
        let christmas_previous = CalendarDate::fixed(year, 1, 1).sub_days(7);

        Self {
            year,
            easter,
            ash_wednesday: ash_wednesday(easter),
            pentecost: pentecost(easter),
            advent_start: first_sunday_of_advent(year),
            christmas,
            epiphany_next: epiphany_after(christmas),
            christmas_previous,
            epiphany: CalendarDate::fixed(year, 1, 6),
        }
    }

    /// `[Dec 25 Y-1, Jan 6 Y)`
    pub fn christmas_spillover(&self) -> DateRange {
        DateRange::new(self.christmas_previous, self.epiphany)
    }

    /// `[Dec 25 Y, Jan 6 Y+1)`
    pub fn christmas_season(&self) -> DateRange {
        DateRange::new(self.christmas, self.epiphany_next)
    }

    /// `[first Sunday of Advent, Dec 25)`
    pub fn advent(&self) -> DateRange {
        DateRange::new(self.advent_start, self.christmas)
    }

    /// `[Ash Wednesday, Easter)`
    pub fn lent(&self) -> DateRange {
        DateRange::new(self.ash_wednesday, self.easter)
    }

    /// `[Easter, Pentecost)`
    pub fn easter_season(&self) -> DateRange {
        DateRange::new(self.easter, self.pentecost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i16, m: i8, day: i8) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn test_easter_spot_checks() {
        assert_eq!(compute_easter(2024), d(2024, 3, 31));
        assert_eq!(compute_easter(2025), d(2025, 4, 20));
        assert_eq!(compute_easter(2026), d(2026, 4, 5));
        assert_eq!(compute_easter(2027), d(2027, 3, 28));
    }

    #[test]
    fn test_easter_is_always_a_sunday() {
        for year in 1583..=2500 {
            assert_eq!(compute_easter(year).weekday(), Weekday::Sunday, "{year}");
        }
    }

    #[test]
    fn test_easter_extreme_years_do_not_panic() {
        for year in [i16::MIN, -9999, -1, 0, 1, 9999, i16::MAX] {
            let easter = compute_easter(year);
            assert!(easter.month() == 3 || easter.month() == 4, "{year}");
        }
    }

    #[test]
    fn test_first_sunday_of_advent() {
        // Christmas on a Sunday: exactly four weeks earlier
        assert_eq!(first_sunday_of_advent(2022), d(2022, 11, 27));
        // Christmas on a Monday
        assert_eq!(first_sunday_of_advent(2023), d(2023, 12, 3));
        // Christmas on a Wednesday
        assert_eq!(first_sunday_of_advent(2024), d(2024, 12, 1));
        // Christmas on a Thursday
        assert_eq!(first_sunday_of_advent(2025), d(2025, 11, 30));
        // Christmas on a Saturday
        assert_eq!(first_sunday_of_advent(2027), d(2027, 11, 28));
    }

    #[test]
    fn test_advent_always_starts_on_sunday_within_window() {
        for year in 1900..=2100 {
            let advent = first_sunday_of_advent(year);
            assert_eq!(advent.weekday(), Weekday::Sunday, "{year}");
            assert!(advent >= d(year, 11, 27) && advent <= d(year, 12, 3), "{year}");
        }
    }

    #[test]
    fn test_ash_wednesday_and_pentecost() {
        let easter = compute_easter(2025);
        assert_eq!(ash_wednesday(easter), d(2025, 3, 5));
        assert_eq!(ash_wednesday(easter).weekday(), Weekday::Wednesday);
        assert_eq!(pentecost(easter), d(2025, 6, 8));

        let easter = compute_easter(2024);
        assert_eq!(ash_wednesday(easter), d(2024, 2, 14));
        assert_eq!(pentecost(easter), d(2024, 5, 19));
    }

    #[test]
    fn test_year_boundaries_christmas_windows() {
        let bounds = YearBoundaries::for_year(2025);
        assert_eq!(bounds.christmas_previous, d(2024, 12, 25));
        assert_eq!(bounds.epiphany, d(2025, 1, 6));
        assert_eq!(bounds.christmas, d(2025, 12, 25));
        assert_eq!(bounds.epiphany_next, d(2026, 1, 6));

        assert!(bounds.christmas_spillover().contains(d(2025, 1, 5)));
        assert!(!bounds.christmas_spillover().contains(d(2025, 1, 6)));
        assert!(bounds.christmas_season().contains(d(2025, 12, 31)));
    }

    #[test]
    fn test_year_boundaries_at_range_edges() {
        let first = YearBoundaries::for_year(-9999);
        assert_eq!(first.christmas_previous, d(-9999, 1, 1));
        assert_eq!(first.epiphany, d(-9999, 1, 6));
        assert!(first.christmas_spillover().contains(d(-9999, 1, 5)));
        assert!(!first.christmas_spillover().contains(d(-9999, 1, 6)));

        let last = YearBoundaries::for_year(9999);
        assert_eq!(last.christmas, d(9999, 12, 25));
        assert_eq!(last.epiphany, d(9999, 1, 6));
    }

    #[test]
    fn test_date_range_days() {
        let range = DateRange::new(d(2024, 12, 30), d(2025, 1, 2));
        let days: Vec<String> = range.days().map(|d| d.iso()).collect();
        assert_eq!(days, vec!["2024-12-30", "2024-12-31", "2025-01-01"]);
        assert!(!range.is_empty());
        assert!(DateRange::new(d(2025, 1, 2), d(2025, 1, 2)).is_empty());
    }
}
