//! Liturgical calendar: Easter computation, season windows and colors.
//!
//! Everything here is a pure function of the date. Boundaries for a year are
//! bundled in [`YearBoundaries`] so a caller classifying many dates of the
//! same year can compute them once.
//!
//! ```rust
//! use vigil_core::calendar::{classify, compute_easter, YearBoundaries};
//! use vigil_core::models::{CalendarDate, LiturgicalSeason};
//!
//! assert_eq!(compute_easter(2025).iso(), "2025-04-20");
//!
//! let date: CalendarDate = "2025-03-05".parse()?;
//! assert_eq!(classify(date), LiturgicalSeason::Lent);
//!
//! let bounds = YearBoundaries::for_year(2025);
//! assert_eq!(bounds.pentecost.iso(), "2025-06-08");
//! # Ok::<(), vigil_core::VigilError>(())
//! ```

pub mod computus;
pub mod season;

pub use computus::{
    ash_wednesday, christmas, compute_easter, epiphany_after, first_sunday_of_advent, pentecost,
    DateRange, YearBoundaries,
};
pub use season::{classify, classify_str, color_of};
