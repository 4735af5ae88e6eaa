//! Data models for the calendar and composed devotions.
//!
//! These are plain values: every composed devotion is built fresh per call
//! and never mutated afterwards, so they derive `PartialEq` for comparison
//! and serde traits for handing to other layers. Display implementations
//! live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use vigil_core::models::{CalendarDate, LiturgicalColor, LiturgicalSeason, TimeOfDay};
//!
//! let date: CalendarDate = "2025-12-25".parse()?;
//! assert_eq!(date.iso(), "2025-12-25");
//! assert_eq!(LiturgicalSeason::Christmas.color(), LiturgicalColor::Gold);
//! assert_eq!("midday".parse::<TimeOfDay>(), Ok(TimeOfDay::Noon));
//! # Ok::<(), vigil_core::VigilError>(())
//! ```

mod date;
mod devotion;
mod language;
mod lectionary;
mod prayer;
mod season;

#[cfg(test)]
mod tests;

pub use date::CalendarDate;
pub use devotion::{
    DailyDevotion, DevotionDay, DevotionReading, DevotionSection, ReadingRole, TimeOfDay,
};
pub use language::Language;
pub use lectionary::LectionaryEntry;
pub use prayer::PrayerKey;
pub use season::{LiturgicalColor, LiturgicalSeason};
