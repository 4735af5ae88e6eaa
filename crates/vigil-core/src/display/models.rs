//! Display implementations for domain models.
//!
//! Enumerations display as their lowercase wire names. Composite models
//! render as markdown for rich terminal display.

use std::fmt;

use super::datetime::LongDate;
use crate::{
    calendar::YearBoundaries,
    models::{
        DailyDevotion, DevotionDay, DevotionSection, LectionaryEntry, LiturgicalColor,
        LiturgicalSeason, ReadingRole, TimeOfDay,
    },
};

impl fmt::Display for LiturgicalSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ReadingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DevotionSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;

        if let Some(rubric) = &self.rubric {
            writeln!(f, "*{rubric}*")?;
            writeln!(f)?;
        }

        if let Some(reference) = &self.reference {
            writeln!(f, "**{reference}**")?;
            writeln!(f)?;
            if self.content == *reference {
                return Ok(());
            }
        }

        match &self.response {
            // Versicle and response
            Some(response) => {
                writeln!(f, "V. {}", self.content)?;
                writeln!(f)?;
                writeln!(f, "**R. {response}**")?;
            }
            None => writeln!(f, "{}", self.content)?,
        }
        writeln!(f)
    }
}

impl fmt::Display for DailyDevotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        writeln!(f, "- Date: {}", LongDate(&self.date))?;
        writeln!(
            f,
            "- Season: {} ({})",
            self.liturgical_season.name(),
            self.liturgical_color()
        )?;
        writeln!(f, "- Language: {}", self.language)?;
        writeln!(f)?;

        for section in &self.sections {
            write!(f, "{section}")?;
        }

        if !self.readings.is_empty() {
            writeln!(f, "## Readings")?;
            writeln!(f)?;
            for reading in &self.readings {
                writeln!(f, "- {}: {}", reading.label, reading.reference)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for DevotionDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for office in self.offices() {
            if !first {
                writeln!(f, "---")?;
                writeln!(f)?;
            }
            write!(f, "{office}")?;
            first = false;
        }

        if first {
            writeln!(f, "No offices for {}.", LongDate(&self.date))?;
        }
        Ok(())
    }
}

impl fmt::Display for LectionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, reference) in [
            ("First Reading", &self.first_reading),
            ("Psalm", &self.psalm),
            ("Second Reading", &self.second_reading),
            ("Gospel", &self.gospel),
        ] {
            if !reference.trim().is_empty() {
                writeln!(f, "- {label}: {reference}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for YearBoundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Liturgical Calendar {}", self.year)?;
        writeln!(f)?;
        writeln!(f, "- Christmas ends: {}", LongDate(&self.epiphany))?;
        writeln!(f, "- Ash Wednesday: {}", LongDate(&self.ash_wednesday))?;
        writeln!(f, "- Easter Sunday: {}", LongDate(&self.easter))?;
        writeln!(f, "- Pentecost: {}", LongDate(&self.pentecost))?;
        writeln!(f, "- First Sunday of Advent: {}", LongDate(&self.advent_start))?;
        writeln!(f, "- Christmas Day: {}", LongDate(&self.christmas))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarDate, DevotionReading, Language};

    fn create_test_devotion() -> DailyDevotion {
        let date = CalendarDate::new(2025, 11, 30).unwrap();
        DailyDevotion {
            id: DailyDevotion::make_id(date, TimeOfDay::Evening, &Language::english()),
            date,
            time_of_day: TimeOfDay::Evening,
            title: "Evening Prayer".to_string(),
            language: Language::english(),
            sections: vec![
                DevotionSection::new("opening", "Opening Versicles", "O God, make speed to save us.")
                    .with_response("O Lord, make haste to help us."),
                DevotionSection::new("psalm", "Psalm", "Psalm 122").with_reference("Psalm 122"),
            ],
            readings: vec![DevotionReading {
                role: ReadingRole::Psalm,
                label: "Psalm".to_string(),
                reference: "Psalm 122".to_string(),
                text: "Read this passage from your Bible.".to_string(),
            }],
            liturgical_season: LiturgicalSeason::Advent,
        }
    }

    #[test]
    fn test_enum_display_uses_wire_names() {
        assert_eq!(LiturgicalSeason::Ordinary.to_string(), "ordinary");
        assert_eq!(LiturgicalColor::Gold.to_string(), "gold");
        assert_eq!(TimeOfDay::Noon.to_string(), "noon");
        assert_eq!(ReadingRole::SecondReading.to_string(), "second-reading");
    }

    #[test]
    fn test_devotion_markdown() {
        let output = create_test_devotion().to_string();
        assert!(output.starts_with("# Evening Prayer\n"));
        assert!(output.contains("- Date: Sunday, November 30, 2025"));
        assert!(output.contains("- Season: Advent (purple)"));
        assert!(output.contains("V. O God, make speed to save us."));
        assert!(output.contains("**R. O Lord, make haste to help us.**"));
        assert!(output.contains("## Psalm\n\n**Psalm 122**\n\n## Readings"));
        assert!(output.contains("## Readings\n\n- Psalm: Psalm 122"));
    }

    #[test]
    fn test_devotion_day_separates_offices() {
        let devotion = create_test_devotion();
        let day = DevotionDay {
            date: devotion.date,
            morning: Some(devotion.clone()),
            noon: None,
            evening: Some(devotion.clone()),
            family: None,
        };
        let output = day.to_string();
        assert_eq!(output.matches("# Evening Prayer").count(), 2);
        assert_eq!(output.matches("---").count(), 1);

        let empty = DevotionDay {
            date: devotion.date,
            morning: None,
            noon: None,
            evening: None,
            family: None,
        };
        assert_eq!(empty.to_string(), "No offices for Sunday, November 30, 2025.\n");
    }

    #[test]
    fn test_year_boundaries_markdown() {
        let output = YearBoundaries::for_year(2025).to_string();
        assert!(output.contains("# Liturgical Calendar 2025"));
        assert!(output.contains("- Easter Sunday: Sunday, April 20, 2025"));
        assert!(output.contains("- Ash Wednesday: Wednesday, March 5, 2025"));
        assert!(output.contains("- First Sunday of Advent: Sunday, November 30, 2025"));
    }

    #[test]
    fn test_entry_skips_blank_references() {
        let entry = LectionaryEntry::new("Acts 2:1-11", "Psalm 104", "", "John 20:19-23");
        let output = entry.to_string();
        assert!(!output.contains("Second Reading"));
        assert_eq!(output.lines().count(), 3);
    }
}
