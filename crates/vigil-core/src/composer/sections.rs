//! Assembly of the fixed fifteen-part office.

use super::canticles::{canticle_name, canticles_for};
use crate::{
    models::{
        DevotionReading, DevotionSection, Language, LectionaryEntry, PrayerKey, ReadingRole,
        TimeOfDay,
    },
    prayers::PrayerResolver,
    sources::{localize, Localizer},
};

/// Section keys in the order they appear in every office.
pub const SECTION_KEYS: [&str; 15] = [
    "sign-of-the-cross",
    "opening",
    "confession",
    "psalm",
    "gloria-patri",
    "first-reading",
    "first-canticle",
    "second-reading",
    "second-canticle",
    "gospel",
    "creed",
    "intercessions",
    "lords-prayer",
    "st-michael",
    "closing",
];

const READING_PLACEHOLDER: &str = "Read this passage from your Bible.";
const NO_READING: &str = "No reading is appointed.";

/// Everything needed to render text for one office.
pub(crate) struct SectionWriter<'a> {
    pub prayers: &'a PrayerResolver,
    pub localizer: &'a (dyn Localizer + Send + Sync),
    pub language: &'a Language,
}

impl SectionWriter<'_> {
    fn localize(&self, key: &str, fallback: &str) -> String {
        localize(self.localizer, self.language, key, fallback)
    }

    fn title(&self, section: &str, fallback: &str) -> String {
        self.localize(&format!("devotion.section.{section}"), fallback)
    }

    fn rubric(&self, section: &str, fallback: &str) -> String {
        self.localize(&format!("devotion.rubric.{section}"), fallback)
    }

    fn prayer(&self, key: &PrayerKey) -> String {
        self.prayers.resolve(key, self.language)
    }

    /// Localized title of the whole office.
    pub fn office_title(&self, time_of_day: TimeOfDay) -> String {
        let fallback = match time_of_day {
            TimeOfDay::Morning => "Morning Prayer",
            TimeOfDay::Noon => "Midday Prayer",
            TimeOfDay::Evening => "Evening Prayer",
            TimeOfDay::Family => "Family Prayer",
        };
        self.localize(&format!("devotion.title.{}", time_of_day.as_str()), fallback)
    }

    fn prayer_section(&self, key: &str, title: &str, prayer: &PrayerKey) -> DevotionSection {
        DevotionSection::new(key, self.title(key, title), self.prayer(prayer))
    }

    fn opening(&self, time_of_day: TimeOfDay) -> DevotionSection {
        let (versicle, response) = match time_of_day {
            TimeOfDay::Morning => (
                "O Lord, open thou our lips.",
                "And our mouth shall show forth thy praise.",
            ),
            TimeOfDay::Noon => ("O God, make speed to save us.", "O Lord, make haste to help us."),
            TimeOfDay::Evening => (
                "Let my prayer be set forth in thy sight as the incense.",
                "And let the lifting up of my hands be an evening sacrifice.",
            ),
            TimeOfDay::Family => (
                "Behold, how good and joyful a thing it is to dwell together in unity.",
                "Thanks be to God.",
            ),
        };
        let prefix = format!("devotion.opening.{}", time_of_day.as_str());
        DevotionSection::new(
            "opening",
            self.title("opening", "Opening Versicles"),
            self.localize(&format!("{prefix}.versicle"), versicle),
        )
        .with_response(self.localize(&format!("{prefix}.response"), response))
    }

    /// Reading sections carry the scripture reference as their text; the
    /// passage itself is left to the reader's Bible.
    fn reading_section(&self, key: &str, title: &str, reference: &str) -> DevotionSection {
        let reference = reference.trim();
        if reference.is_empty() {
            return DevotionSection::new(
                key,
                self.title(key, title),
                self.localize("devotion.reading.none", NO_READING),
            );
        }
        DevotionSection::new(key, self.title(key, title), reference).with_reference(reference)
    }

    fn canticle_section(&self, key: &str, canticle: &PrayerKey) -> DevotionSection {
        let title = self.localize(
            &format!("devotion.canticle.{canticle}"),
            canticle_name(canticle),
        );
        DevotionSection::new(key, title, self.prayer(canticle))
    }

    /// The fifteen sections of an office, in [`SECTION_KEYS`] order.
    pub fn sections(&self, time_of_day: TimeOfDay, entry: &LectionaryEntry) -> Vec<DevotionSection> {
        let canticles = canticles_for(time_of_day);

        vec![
            self.prayer_section("sign-of-the-cross", "Sign of the Cross", &PrayerKey::SIGN_OF_THE_CROSS)
                .with_rubric(self.rubric("sign-of-the-cross", "Make the sign of the cross.")),
            self.opening(time_of_day),
            self.prayer_section("confession", "Confession", &PrayerKey::CONFESSION)
                .with_rubric(self.rubric(
                    "confession",
                    "Pause in silence to call to mind your sins.",
                )),
            self.reading_section("psalm", "Psalm", &entry.psalm),
            self.prayer_section("gloria-patri", "Gloria Patri", &PrayerKey::GLORIA_PATRI),
            self.reading_section("first-reading", "First Reading", &entry.first_reading),
            self.canticle_section("first-canticle", &canticles.first),
            self.reading_section("second-reading", "Second Reading", &entry.second_reading),
            self.canticle_section("second-canticle", &canticles.second),
            self.reading_section("gospel", "Gospel", &entry.gospel)
                .with_rubric(self.rubric("gospel", "Stand for the Gospel.")),
            self.prayer_section("creed", "Apostles' Creed", &PrayerKey::APOSTLES_CREED),
            DevotionSection::new(
                "intercessions",
                self.title("intercessions", "Intercessions"),
                self.localize(
                    "devotion.intercessions.content",
                    "Offer your prayers for the Church, the world, and those in need.",
                ),
            )
            .with_rubric(self.rubric(
                "intercessions",
                "Intercessions may be offered freely or in silence.",
            )),
            self.prayer_section("lords-prayer", "The Lord's Prayer", &PrayerKey::LORDS_PRAYER),
            self.prayer_section("st-michael", "Prayer to St. Michael", &PrayerKey::ST_MICHAEL),
            self.prayer_section("closing", "Closing", &PrayerKey::SIGN_OF_THE_CROSS)
                .with_rubric(self.rubric("closing", "Make the sign of the cross.")),
        ]
    }

    /// Readings with a non-blank reference, in liturgical order.
    pub fn readings(&self, entry: &LectionaryEntry) -> Vec<DevotionReading> {
        let text = self.localize("devotion.reading.placeholder", READING_PLACEHOLDER);
        [
            (ReadingRole::FirstReading, "First Reading", &entry.first_reading),
            (ReadingRole::Psalm, "Psalm", &entry.psalm),
            (ReadingRole::SecondReading, "Second Reading", &entry.second_reading),
            (ReadingRole::Gospel, "Gospel", &entry.gospel),
        ]
        .into_iter()
        .filter(|(_, _, reference)| !reference.trim().is_empty())
        .map(|(role, label, reference)| DevotionReading {
            role,
            label: self.localize(&format!("devotion.reading.{}", role.as_str()), label),
            reference: reference.trim().to_string(),
            text: text.clone(),
        })
        .collect()
    }
}
