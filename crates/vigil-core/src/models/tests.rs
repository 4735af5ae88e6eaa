#[cfg(test)]
mod model_tests {
    use crate::models::{
        CalendarDate, DailyDevotion, DevotionDay, DevotionSection, Language, LiturgicalColor,
        LiturgicalSeason, TimeOfDay,
    };

    fn create_test_devotion(time_of_day: TimeOfDay) -> DailyDevotion {
        let date = CalendarDate::new(2025, 3, 9).unwrap();
        let language = Language::english();
        DailyDevotion {
            id: DailyDevotion::make_id(date, time_of_day, &language),
            date,
            time_of_day,
            title: "Test Office".to_string(),
            language,
            sections: vec![
                DevotionSection::new("opening", "Opening", "O Lord, open my lips.")
                    .with_response("And my mouth shall proclaim your praise."),
                DevotionSection::new("psalm", "Psalm", "Psalm 91").with_reference("Psalm 91"),
            ],
            readings: Vec::new(),
            liturgical_season: LiturgicalSeason::Lent,
        }
    }

    #[test]
    fn test_time_of_day_parsing() {
        assert_eq!("Morning".parse(), Ok(TimeOfDay::Morning));
        assert_eq!("midday".parse(), Ok(TimeOfDay::Noon));
        assert_eq!("noon".parse(), Ok(TimeOfDay::Noon));
        assert_eq!(" family ".parse(), Ok(TimeOfDay::Family));
        assert!("compline".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_time_of_day_unknown_defaults_to_morning() {
        assert_eq!(TimeOfDay::parse_or_default("vespers"), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::parse_or_default(""), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::parse_or_default("evening"), TimeOfDay::Evening);
    }

    #[test]
    fn test_devotion_id_is_deterministic() {
        let devotion = create_test_devotion(TimeOfDay::Evening);
        assert_eq!(devotion.id, "2025-03-09-evening-en");
        assert_eq!(devotion.liturgical_color(), LiturgicalColor::Purple);
    }

    #[test]
    fn test_section_lookup() {
        let devotion = create_test_devotion(TimeOfDay::Morning);
        let opening = devotion.section("opening").unwrap();
        assert_eq!(
            opening.response.as_deref(),
            Some("And my mouth shall proclaim your praise.")
        );
        assert!(devotion.section("missing").is_none());
    }

    #[test]
    fn test_devotion_day_offices_in_hour_order() {
        let day = DevotionDay {
            date: CalendarDate::new(2025, 3, 9).unwrap(),
            morning: Some(create_test_devotion(TimeOfDay::Morning)),
            noon: None,
            evening: Some(create_test_devotion(TimeOfDay::Evening)),
            family: Some(create_test_devotion(TimeOfDay::Family)),
        };

        let hours: Vec<TimeOfDay> = day.offices().map(|d| d.time_of_day).collect();
        assert_eq!(
            hours,
            vec![TimeOfDay::Morning, TimeOfDay::Evening, TimeOfDay::Family]
        );
        assert!(day.get(TimeOfDay::Noon).is_none());
    }

    #[test]
    fn test_devotion_serializes_camel_case() {
        let devotion = create_test_devotion(TimeOfDay::Noon);
        let json = serde_json::to_value(&devotion).unwrap();
        assert_eq!(json["timeOfDay"], "noon");
        assert_eq!(json["liturgicalSeason"], "lent");
        assert_eq!(json["date"], "2025-03-09");
        assert_eq!(json["language"], "en");
        assert!(json["sections"][1].get("rubric").is_none());

        let back: DailyDevotion = serde_json::from_value(json).unwrap();
        assert_eq!(back, devotion);
    }
}
