//! Core library for the Vigil daily devotion application.
//!
//! This crate classifies dates into liturgical seasons and composes
//! multi-section devotional offices (morning, midday, evening and family
//! prayer) from a lectionary, per-language prayer libraries and localized
//! strings.
//!
//! - [`calendar`]: Easter computation, season boundaries and colors
//! - [`prayers`]: prayer texts with cross-language fallback
//! - [`sources`]: lectionary and localization collaborators, data files
//! - [`composer`]: assembles a [`DailyDevotion`] for a date, hour and language
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] as markdown
//! ([`display::models`]); presentation-only values get wrapper types in
//! [`display`]. The CLI renders that markdown in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use vigil_core::{
//!     calendar, CalendarDate, DevotionComposerBuilder, Language, LectionaryEntry, LiturgicalSeason,
//!     StaticLectionary, TimeOfDay,
//! };
//!
//! let date: CalendarDate = "2025-04-20".parse()?;
//! assert_eq!(calendar::classify(date), LiturgicalSeason::Easter);
//!
//! let lectionary = StaticLectionary::new().with_entry(
//!     date,
//!     LectionaryEntry::new("Acts 10:34-43", "Psalm 118", "Colossians 3:1-4", "John 20:1-18"),
//! );
//! let composer = DevotionComposerBuilder::new()
//!     .with_lectionary(lectionary)
//!     .build()?;
//!
//! if let Some(devotion) = composer.build_devotion(date, TimeOfDay::Morning, &Language::new("tl")) {
//!     println!("{}", devotion);
//! }
//! # Ok::<(), vigil_core::VigilError>(())
//! ```

pub mod calendar;
pub mod composer;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod prayers;
pub mod sources;

// Re-export commonly used types
pub use composer::{DevotionComposer, DevotionComposerBuilder};
pub use display::{EntryCheck, EntryDates, LongDate, SeasonReport};
pub use error::{Result, VigilError};
pub use models::{
    CalendarDate, DailyDevotion, DevotionDay, DevotionReading, DevotionSection, Language,
    LectionaryEntry, LiturgicalColor, LiturgicalSeason, PrayerKey, ReadingRole, TimeOfDay,
};
pub use params::{BuildDay, BuildDevotion, CheckDate, ClassifyDate, ShowYear};
pub use prayers::{PrayerAliases, PrayerLibrary, PrayerResolver, TextLibrary};
pub use sources::{Catalogs, DataDir, Lectionary, Localizer, StaticLectionary};
