use vigil_core::{
    calendar::{classify, compute_easter, first_sunday_of_advent, YearBoundaries},
    CalendarDate, LiturgicalSeason,
};

fn d(y: i16, m: i8, day: i8) -> CalendarDate {
    CalendarDate::new(y, m, day).expect("valid date")
}

/// Gregorian Easter Sundays, 2000 to 2099.
const EASTER_TABLE: [(i16, i8, i8); 100] = [
    (2000, 4, 23),
    (2001, 4, 15),
    (2002, 3, 31),
    (2003, 4, 20),
    (2004, 4, 11),
    (2005, 3, 27),
    (2006, 4, 16),
    (2007, 4, 8),
    (2008, 3, 23),
    (2009, 4, 12),
    (2010, 4, 4),
    (2011, 4, 24),
    (2012, 4, 8),
    (2013, 3, 31),
    (2014, 4, 20),
    (2015, 4, 5),
    (2016, 3, 27),
    (2017, 4, 16),
    (2018, 4, 1),
    (2019, 4, 21),
    (2020, 4, 12),
    (2021, 4, 4),
    (2022, 4, 17),
    (2023, 4, 9),
    (2024, 3, 31),
    (2025, 4, 20),
    (2026, 4, 5),
    (2027, 3, 28),
    (2028, 4, 16),
    (2029, 4, 1),
    (2030, 4, 21),
    (2031, 4, 13),
    (2032, 3, 28),
    (2033, 4, 17),
    (2034, 4, 9),
    (2035, 3, 25),
    (2036, 4, 13),
    (2037, 4, 5),
    (2038, 4, 25),
    (2039, 4, 10),
    (2040, 4, 1),
    (2041, 4, 21),
    (2042, 4, 6),
    (2043, 3, 29),
    (2044, 4, 17),
    (2045, 4, 9),
    (2046, 3, 25),
    (2047, 4, 14),
    (2048, 4, 5),
    (2049, 4, 18),
    (2050, 4, 10),
    (2051, 4, 2),
    (2052, 4, 21),
    (2053, 4, 6),
    (2054, 3, 29),
    (2055, 4, 18),
    (2056, 4, 2),
    (2057, 4, 22),
    (2058, 4, 14),
    (2059, 3, 30),
    (2060, 4, 18),
    (2061, 4, 10),
    (2062, 3, 26),
    (2063, 4, 15),
    (2064, 4, 6),
    (2065, 3, 29),
    (2066, 4, 11),
    (2067, 4, 3),
    (2068, 4, 22),
    (2069, 4, 14),
    (2070, 3, 30),
    (2071, 4, 19),
    (2072, 4, 10),
    (2073, 3, 26),
    (2074, 4, 15),
    (2075, 4, 7),
    (2076, 4, 19),
    (2077, 4, 11),
    (2078, 4, 3),
    (2079, 4, 23),
    (2080, 4, 7),
    (2081, 3, 30),
    (2082, 4, 19),
    (2083, 4, 4),
    (2084, 3, 26),
    (2085, 4, 15),
    (2086, 3, 31),
    (2087, 4, 20),
    (2088, 4, 11),
    (2089, 4, 3),
    (2090, 4, 16),
    (2091, 4, 8),
    (2092, 3, 30),
    (2093, 4, 12),
    (2094, 4, 4),
    (2095, 4, 24),
    (2096, 4, 15),
    (2097, 3, 31),
    (2098, 4, 20),
    (2099, 4, 12),
];

#[test]
fn test_easter_matches_published_table() {
    for (year, month, day) in EASTER_TABLE {
        assert_eq!(compute_easter(year), d(year, month, day), "Easter {year}");
    }
}

#[test]
fn test_easter_extremes() {
    // Earliest and latest possible Easter dates
    assert_eq!(compute_easter(1818), d(1818, 3, 22));
    assert_eq!(compute_easter(2285), d(2285, 3, 22));
    assert_eq!(compute_easter(1943), d(1943, 4, 25));
    assert_eq!(compute_easter(2038), d(2038, 4, 25));
}

#[test]
fn test_easter_window() {
    for year in 1583..=4099 {
        let easter = compute_easter(year);
        assert!(easter >= d(year, 3, 22) && easter <= d(year, 4, 25), "{year}: {easter}");
    }
}

#[test]
fn test_advent_is_fourth_sunday_before_christmas() {
    for year in 1900..=2100 {
        let advent = first_sunday_of_advent(year);
        let christmas = d(year, 12, 25);
        let gap = (0..=28)
            .find(|n| advent.add_days(*n) == christmas)
            .expect("advent within four weeks of christmas");
        assert!((22..=28).contains(&gap), "{year}: {gap}");
    }
}

/// Season following `season` in liturgical order, except Ordinary Time
/// after Easter, which is followed by Advent.
fn next_expected(season: LiturgicalSeason) -> LiturgicalSeason {
    match season {
        LiturgicalSeason::Christmas => LiturgicalSeason::Ordinary,
        LiturgicalSeason::Ordinary => LiturgicalSeason::Lent,
        LiturgicalSeason::Lent => LiturgicalSeason::Easter,
        LiturgicalSeason::Easter => LiturgicalSeason::Ordinary,
        LiturgicalSeason::Advent => LiturgicalSeason::Christmas,
    }
}

#[test]
fn test_ten_years_are_total_and_piecewise_constant() {
    let start = d(2020, 1, 1);
    let end = d(2030, 1, 1);

    let mut date = start;
    let mut current = classify(date);
    let mut changes = 0;
    // Ordinary Time is followed by Lent in winter and by Advent in autumn
    let mut seen_easter_this_year = false;

    while date < end {
        let season = classify(date);
        if season != current {
            let bounds = YearBoundaries::for_year(date.year());
            let on_boundary = [
                bounds.epiphany,
                bounds.ash_wednesday,
                bounds.easter,
                bounds.pentecost,
                bounds.advent_start,
                bounds.christmas,
            ]
            .contains(&date);
            assert!(on_boundary, "{current:?} -> {season:?} off boundary at {date}");

            let expected = if current == LiturgicalSeason::Ordinary && seen_easter_this_year {
                LiturgicalSeason::Advent
            } else {
                next_expected(current)
            };
            assert_eq!(season, expected, "unexpected change at {date}");

            if season == LiturgicalSeason::Easter {
                seen_easter_this_year = true;
            }
            if season == LiturgicalSeason::Christmas {
                seen_easter_this_year = false;
            }
            current = season;
            changes += 1;
        }
        date = date.succ();
    }

    // Six changes per year: Ordinary, Lent, Easter, Ordinary, Advent, Christmas
    assert_eq!(changes, 60);
}

#[test]
fn test_new_year_is_christmas() {
    for year in 1990..=2040 {
        assert_eq!(classify(d(year, 12, 31)), LiturgicalSeason::Christmas, "{year}");
        assert_eq!(classify(d(year, 1, 1)), LiturgicalSeason::Christmas, "{year}");
        assert_eq!(classify(d(year, 1, 6)), LiturgicalSeason::Ordinary, "{year}");
    }
}

#[test]
fn test_boundaries_classify() {
    let bounds = YearBoundaries::for_year(2024);
    assert_eq!(bounds.classify(bounds.ash_wednesday), LiturgicalSeason::Lent);
    assert_eq!(bounds.classify(bounds.easter.sub_days(1)), LiturgicalSeason::Lent);
    assert_eq!(bounds.classify(bounds.easter), LiturgicalSeason::Easter);
    assert_eq!(bounds.classify(bounds.pentecost.sub_days(1)), LiturgicalSeason::Easter);
    assert_eq!(bounds.classify(bounds.pentecost), LiturgicalSeason::Ordinary);
    assert_eq!(bounds.classify(bounds.advent_start), LiturgicalSeason::Advent);
    assert_eq!(bounds.classify(d(2024, 12, 24)), LiturgicalSeason::Advent);
    assert_eq!(bounds.classify(d(2024, 12, 25)), LiturgicalSeason::Christmas);
}
