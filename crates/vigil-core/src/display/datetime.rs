//! Date display utilities.

use std::fmt;

use crate::models::CalendarDate;

/// A wrapper around `CalendarDate` that formats it in long form, e.g.
/// `Sunday, March 31, 2024`.
///
/// The date is a civil date, so no time zone is involved and the output is
/// the same wherever it is rendered.
pub struct LongDate<'a>(pub &'a CalendarDate);

impl<'a> fmt::Display for LongDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_civil().strftime("%A, %B %-d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        let date = CalendarDate::new(2024, 3, 31).unwrap();
        assert_eq!(LongDate(&date).to_string(), "Sunday, March 31, 2024");

        let date = CalendarDate::new(2025, 12, 5).unwrap();
        assert_eq!(LongDate(&date).to_string(), "Friday, December 5, 2025");
    }
}
