//! Cross-checks for the chronology modules against published holiday dates.

use hc_time::coptic::coptic_dates_in_gregorian_year;
use hc_time::easter::{easter_sunday_for, gregorian_easter_sunday, julian_easter_sunday};
use hc_time::islamic::islamic_dates_in_gregorian_year;
use hc_time::{Chronology, Date, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Easter ──────────────────────────────────────────────────────────────────

#[test]
fn test_gregorian_easter_table() {
    // (year, month, day) of Western Easter Sunday.
    let expected = [
        (1990, 4, 15),
        (1999, 4, 4),
        (2000, 4, 23),
        (2008, 3, 23),
        (2011, 4, 24),
        (2016, 3, 27),
        (2020, 4, 12),
        (2023, 4, 9),
        (2024, 3, 31),
        (2025, 4, 20),
        (2030, 4, 21),
        (2038, 4, 25),
    ];
    for (y, m, d) in expected {
        assert_eq!(
            gregorian_easter_sunday(y).unwrap(),
            date(y, m, d),
            "Gregorian Easter {y}"
        );
    }
}

#[test]
fn test_julian_easter_table() {
    // Orthodox Easter Sunday, expressed as a Gregorian date.
    let expected = [
        (2016, 5, 1),
        (2020, 4, 19),
        (2021, 5, 2),
        (2023, 4, 16),
        (2024, 5, 5),
        (2025, 4, 20),
    ];
    for (y, m, d) in expected {
        assert_eq!(
            julian_easter_sunday(y).unwrap(),
            date(y, m, d),
            "Julian Easter {y}"
        );
    }
}

#[test]
fn test_chronology_dispatch() {
    assert_eq!(
        easter_sunday_for(2024, Chronology::Gregorian).unwrap(),
        date(2024, 3, 31)
    );
    assert_eq!(
        easter_sunday_for(2024, Chronology::Julian).unwrap(),
        date(2024, 5, 5)
    );
    assert_eq!(
        easter_sunday_for(2024, Chronology::Default).unwrap(),
        date(2024, 3, 31)
    );
}

// ─── Islamic chronology ──────────────────────────────────────────────────────

#[test]
fn test_islamic_dates_land_within_requested_year() {
    for year in 1990..=2060u16 {
        for dates in [
            islamic_dates_in_gregorian_year(year, 1, 1).unwrap(),
            islamic_dates_in_gregorian_year(year, 10, 1).unwrap(),
            islamic_dates_in_gregorian_year(year, 12, 10).unwrap(),
        ] {
            assert!(dates.len() <= 2, "at most two occurrences in {year}");
            for d in dates {
                assert_eq!(d.year(), year);
            }
        }
    }
}

#[test]
fn test_islamic_year_count_over_a_cycle() {
    // Over a long run of Gregorian years every rule occurs once per
    // Islamic year; the drift means an occasional year holds two
    // occurrences and (for coordinates late in the Islamic year) some
    // hold none. Net: N Gregorian years see roughly N * 365.25 / 354.37
    // occurrences.
    let mut total = 0usize;
    for year in 1950..=2049u16 {
        total += islamic_dates_in_gregorian_year(year, 1, 1).unwrap().len();
    }
    assert_eq!(total, 103);
}

#[test]
fn test_known_islamic_holidays() {
    // Eid al-Adha (10 Dhu al-Hijjah): 1445 AH = June 17, 2024 in the
    // civil tabular reckoning.
    assert_eq!(
        islamic_dates_in_gregorian_year(2024, 12, 10).unwrap(),
        vec![date(2024, 6, 17)]
    );
    // Mawlid an-Nabi (12 Rabi al-awwal) 1445 AH = September 27, 2023.
    assert_eq!(
        islamic_dates_in_gregorian_year(2023, 3, 12).unwrap(),
        vec![date(2023, 9, 27)]
    );
}

// ─── Coptic chronology ───────────────────────────────────────────────────────

#[test]
fn test_ethiopian_orthodox_dates() {
    // Enkutatash / Coptic New Year (1 Thoout).
    assert_eq!(
        coptic_dates_in_gregorian_year(2024, 1, 1).unwrap(),
        vec![date(2024, 9, 11)]
    );
    // Meskel (17 Thoout).
    assert_eq!(
        coptic_dates_in_gregorian_year(2024, 1, 17).unwrap(),
        vec![date(2024, 9, 27)]
    );
    // Timkat (10 Tobi).
    assert_eq!(
        coptic_dates_in_gregorian_year(2024, 5, 10).unwrap(),
        vec![date(2024, 1, 19)]
    );
    assert_eq!(
        coptic_dates_in_gregorian_year(2025, 5, 10).unwrap(),
        vec![date(2025, 1, 19)]
    );
}

#[test]
fn test_coptic_dates_land_within_requested_year() {
    for year in 1990..=2060u16 {
        let dates = coptic_dates_in_gregorian_year(year, 1, 17).unwrap();
        assert_eq!(dates.len(), 1, "exactly one Meskel per Gregorian year");
        assert_eq!(dates[0].year(), year);
        assert_eq!(dates[0].month(), 9);
    }
}

// ─── Weekday consistency ─────────────────────────────────────────────────────

#[test]
fn test_weekday_against_known_anchors() {
    assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(2024, 7, 4).weekday(), Weekday::Thursday);
    assert_eq!(date(2199, 12, 31).weekday(), Weekday::Tuesday);
}

// ─── Serial representation properties ────────────────────────────────────────

proptest::proptest! {
    #[test]
    fn prop_serial_ymd_roundtrip(serial in 1i32..=109_573) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, day) = d.ymd();
        proptest::prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
    }

    #[test]
    fn prop_weekdays_cycle_daily(serial in 1i32..109_573) {
        let d = Date::from_serial(serial).unwrap();
        let next = d.add_days(1).unwrap();
        proptest::prop_assert_eq!(
            next.weekday().ordinal(),
            d.weekday().ordinal() % 7 + 1
        );
    }
}
