//! Composed devotions and their parts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CalendarDate, Language, LiturgicalColor, LiturgicalSeason};

/// The hour of prayer an office is composed for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Morning,
    /// Midday prayer
    Noon,
    Evening,
    /// Prayer said together as a household
    Family,
}

impl TimeOfDay {
    /// Every hour, in the order offices are listed for a day.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Noon,
        TimeOfDay::Evening,
        TimeOfDay::Family,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Noon => "noon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Family => "family",
        }
    }

    /// Parses a time of day, defaulting to `Morning` for anything unknown.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err| {
            log::warn!("{err}; using morning");
            TimeOfDay::Morning
        })
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "noon" | "midday" => Ok(TimeOfDay::Noon),
            "evening" => Ok(TimeOfDay::Evening),
            "family" => Ok(TimeOfDay::Family),
            _ => Err(format!("Invalid time of day: {s}")),
        }
    }
}

/// Role a scripture reading plays in the office.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ReadingRole {
    FirstReading,
    Psalm,
    SecondReading,
    Gospel,
}

impl ReadingRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingRole::FirstReading => "first-reading",
            ReadingRole::Psalm => "psalm",
            ReadingRole::SecondReading => "second-reading",
            ReadingRole::Gospel => "gospel",
        }
    }
}

/// One displayable unit of an office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DevotionSection {
    /// Stable identifier of the section within the office
    pub key: String,
    pub title: String,
    pub content: String,
    /// Scripture reference, for reading sections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Instruction to the person praying
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<String>,
    /// People's response to a versicle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl DevotionSection {
    pub fn new(key: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            content: content.into(),
            reference: None,
            rubric: None,
            response: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_rubric(mut self, rubric: impl Into<String>) -> Self {
        self.rubric = Some(rubric.into());
        self
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }
}

/// A scripture reading presented alongside the office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DevotionReading {
    pub role: ReadingRole,
    pub label: String,
    pub reference: String,
    /// Placeholder; scripture text is looked up by the reader
    pub text: String,
}

/// A complete office for one date, hour and language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyDevotion {
    /// Deterministic identifier: `{date}-{time_of_day}-{language}`
    pub id: String,
    pub date: CalendarDate,
    pub time_of_day: TimeOfDay,
    pub title: String,
    pub language: Language,
    pub sections: Vec<DevotionSection>,
    pub readings: Vec<DevotionReading>,
    pub liturgical_season: LiturgicalSeason,
}

impl DailyDevotion {
    /// Builds the identifier used for a devotion.
    pub fn make_id(date: CalendarDate, time_of_day: TimeOfDay, language: &Language) -> String {
        format!("{date}-{}-{language}", time_of_day.as_str())
    }

    pub fn liturgical_color(&self) -> LiturgicalColor {
        self.liturgical_season.color()
    }

    /// Looks up a section by key.
    pub fn section(&self, key: &str) -> Option<&DevotionSection> {
        self.sections.iter().find(|section| section.key == key)
    }
}

/// All offices for a single date.
///
/// A missing hour means the date has no lectionary entry, not a failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DevotionDay {
    pub date: CalendarDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning: Option<DailyDevotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noon: Option<DailyDevotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening: Option<DailyDevotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<DailyDevotion>,
}

impl DevotionDay {
    pub fn get(&self, time_of_day: TimeOfDay) -> Option<&DailyDevotion> {
        match time_of_day {
            TimeOfDay::Morning => self.morning.as_ref(),
            TimeOfDay::Noon => self.noon.as_ref(),
            TimeOfDay::Evening => self.evening.as_ref(),
            TimeOfDay::Family => self.family.as_ref(),
        }
    }

    /// Present offices in hour order.
    pub fn offices(&self) -> impl Iterator<Item = &DailyDevotion> {
        TimeOfDay::ALL.into_iter().filter_map(move |time| self.get(time))
    }
}
