//! Devotion composition.
//!
//! [`DevotionComposer`] is the entry point of the library. It combines the
//! lectionary entry for a date, the liturgical season of that date, the
//! canticles of the requested hour and prayer texts in the requested
//! language into a [`DailyDevotion`].
//!
//! Composition never fails. A date without a lectionary entry yields `None`,
//! and missing prayer texts or strings fall back as described in
//! [`crate::prayers`] and [`crate::sources::localize`].
//!
//! ```rust
//! use vigil_core::composer::DevotionComposer;
//! use vigil_core::models::{CalendarDate, Language, LectionaryEntry, TimeOfDay};
//! use vigil_core::sources::StaticLectionary;
//!
//! let date: CalendarDate = "2025-11-30".parse()?;
//! let lectionary = StaticLectionary::new().with_entry(
//!     date,
//!     LectionaryEntry::new("Isaiah 2:1-5", "Psalm 122", "Romans 13:11-14", "Matthew 24:36-44"),
//! );
//! let composer = DevotionComposer::builder().with_lectionary(lectionary).build()?;
//!
//! let devotion = composer
//!     .build_devotion(date, TimeOfDay::Evening, &Language::english())
//!     .expect("entry exists");
//! assert_eq!(devotion.id, "2025-11-30-evening-en");
//! assert_eq!(devotion.sections.len(), 15);
//! assert!(composer.build_devotion(date.succ(), TimeOfDay::Evening, &Language::english()).is_none());
//! # Ok::<(), vigil_core::VigilError>(())
//! ```

mod builder;
mod canticles;
mod sections;


use std::fmt;

pub use builder::DevotionComposerBuilder;
pub use canticles::{canticles_for, CanticlePair};
pub use sections::SECTION_KEYS;

use self::sections::SectionWriter;
use crate::{
    calendar::classify,
    models::{CalendarDate, DailyDevotion, DevotionDay, Language, TimeOfDay},
    prayers::PrayerResolver,
    sources::{Lectionary, Localizer},
};

/// Composes devotional offices from a lectionary, prayer libraries and
/// string catalogs.
///
/// Immutable once built and `Send + Sync`, so one instance can serve any
/// number of threads.
pub struct DevotionComposer {
    lectionary: Box<dyn Lectionary + Send + Sync>,
    prayers: PrayerResolver,
    localizer: Box<dyn Localizer + Send + Sync>,
}

impl DevotionComposer {
    pub fn builder() -> DevotionComposerBuilder {
        DevotionComposerBuilder::new()
    }

    /// Builds the office for `date` at `time_of_day` in `language`.
    ///
    /// Returns `None` when the lectionary has no entry for the date.
    pub fn build_devotion(
        &self,
        date: CalendarDate,
        time_of_day: TimeOfDay,
        language: &Language,
    ) -> Option<DailyDevotion> {
        let Some(entry) = self.lectionary.get(date) else {
            log::debug!("No lectionary entry for {date}");
            return None;
        };

        let writer = self.writer(language);
        Some(DailyDevotion {
            id: DailyDevotion::make_id(date, time_of_day, language),
            date,
            time_of_day,
            title: writer.office_title(time_of_day),
            language: language.clone(),
            sections: writer.sections(time_of_day, entry),
            readings: writer.readings(entry),
            liturgical_season: classify(date),
        })
    }

    /// Builds all four offices for `date`.
    ///
    /// Returns `None` when the lectionary has no entry for the date.
    pub fn build_devotion_day(&self, date: CalendarDate, language: &Language) -> Option<DevotionDay> {
        if !self.has_entry(date) {
            return None;
        }
        let office = |time| self.build_devotion(date, time, language);
        Some(DevotionDay {
            date,
            morning: office(TimeOfDay::Morning),
            noon: office(TimeOfDay::Noon),
            evening: office(TimeOfDay::Evening),
            family: office(TimeOfDay::Family),
        })
    }

    pub fn has_entry(&self, date: CalendarDate) -> bool {
        self.lectionary.get(date).is_some()
    }

    /// Every date with a lectionary entry as sorted ISO strings.
    pub fn all_dates(&self) -> Vec<String> {
        let mut dates = self.lectionary.dates();
        dates.sort();
        dates.iter().map(CalendarDate::iso).collect()
    }

    pub fn prayers(&self) -> &PrayerResolver {
        &self.prayers
    }

    fn writer<'a>(&'a self, language: &'a Language) -> SectionWriter<'a> {
        SectionWriter {
            prayers: &self.prayers,
            localizer: &*self.localizer,
            language,
        }
    }
}

impl fmt::Debug for DevotionComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DevotionComposer")
            .field("entries", &self.lectionary.dates().len())
            .field("prayers", &self.prayers)
            .finish_non_exhaustive()
    }
}
