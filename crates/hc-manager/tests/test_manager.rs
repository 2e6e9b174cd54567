//! Integration tests for the hierarchy orchestrator.

use hc_manager::HolidayManager;
use hc_rules::model::{FixedDay, FixedRule, RuleInfo};
use hc_rules::{Configuration, Holiday, RuleSet};
use hc_time::{Date, DateInterval, Month};
use std::collections::HashSet;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn fixed_rule(key: &str, month: Month, day: u8) -> FixedRule {
    FixedRule {
        date: FixedDay { month, day },
        moving_conditions: vec![],
        info: RuleInfo {
            description_key: Some(key.into()),
            ..RuleInfo::default()
        },
    }
}

fn ruleset(rules: Vec<FixedRule>) -> RuleSet {
    RuleSet {
        fixed: rules,
        ..RuleSet::default()
    }
}

/// root (NEW_YEAR) → us (INDEPENDENCE) → ak (SEWARD_DAY), al (JEFFERSON_DAY)
fn sample_configuration() -> Configuration {
    Configuration {
        hierarchy: "root".into(),
        description: "Root".into(),
        holidays: ruleset(vec![fixed_rule("NEW_YEAR", Month::January, 1)]),
        sub_configurations: vec![Configuration {
            hierarchy: "us".into(),
            description: "United States".into(),
            holidays: ruleset(vec![fixed_rule("INDEPENDENCE", Month::July, 4)]),
            sub_configurations: vec![
                Configuration {
                    hierarchy: "ak".into(),
                    description: "Alaska".into(),
                    holidays: ruleset(vec![fixed_rule("SEWARD_DAY", Month::March, 30)]),
                    sub_configurations: vec![],
                },
                Configuration {
                    hierarchy: "al".into(),
                    description: "Alabama".into(),
                    holidays: ruleset(vec![fixed_rule("JEFFERSON_DAY", Month::April, 13)]),
                    sub_configurations: vec![],
                },
            ],
        }],
    }
}

fn keys_of(holidays: &HashSet<Holiday>) -> HashSet<String> {
    holidays
        .iter()
        .map(|h| h.description_key().to_owned())
        .collect()
}

#[test]
fn test_root_query_evaluates_root_rules_only() {
    let manager = HolidayManager::new(sample_configuration()).unwrap();
    let holidays = manager.holidays(2024, &[]).unwrap();
    assert_eq!(keys_of(&holidays), HashSet::from(["NEW_YEAR".to_owned()]));
}

#[test]
fn test_descent_accumulates_each_level() {
    let manager = HolidayManager::new(sample_configuration()).unwrap();
    let holidays = manager.holidays(2024, &["us", "ak"]).unwrap();
    assert_eq!(
        keys_of(&holidays),
        HashSet::from([
            "NEW_YEAR".to_owned(),
            "INDEPENDENCE".to_owned(),
            "SEWARD_DAY".to_owned(),
        ])
    );
    assert!(holidays
        .iter()
        .any(|h| h.date() == date(2024, 3, 30) && h.description_key() == "SEWARD_DAY"));
}

#[test]
fn test_path_matching_is_case_insensitive() {
    let manager = HolidayManager::new(sample_configuration()).unwrap();
    let lower = manager.holidays(2024, &["us", "ak"]).unwrap();
    let upper = manager.holidays(2024, &["US", "AK"]).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn test_unmatched_segment_stops_descent_silently() {
    let manager = HolidayManager::new(sample_configuration()).unwrap();
    let missing = manager.holidays(2024, &["us", "xx"]).unwrap();
    let us_only = manager.holidays(2024, &["us"]).unwrap();
    assert_eq!(missing, us_only);
    // Segments after the miss are ignored too.
    let trailing = manager.holidays(2024, &["us", "xx", "ak"]).unwrap();
    assert_eq!(trailing, us_only);
    // A miss at the root returns root-level holidays alone.
    let root_miss = manager.holidays(2024, &["zz", "ak"]).unwrap();
    assert_eq!(keys_of(&root_miss), HashSet::from(["NEW_YEAR".to_owned()]));
}

#[test]
fn test_duplicate_records_across_levels_collapse() {
    // The same rule at two hierarchy levels yields one record.
    let mut config = sample_configuration();
    config.sub_configurations[0]
        .holidays
        .fixed
        .push(fixed_rule("NEW_YEAR", Month::January, 1));
    let manager = HolidayManager::new(config).unwrap();
    let holidays = manager.holidays(2024, &["us"]).unwrap();
    assert_eq!(
        holidays
            .iter()
            .filter(|h| h.description_key() == "NEW_YEAR")
            .count(),
        1
    );
}

#[test]
fn test_duplicate_sibling_ids_are_rejected_at_construction() {
    let mut config = sample_configuration();
    let duplicate = config.sub_configurations[0].sub_configurations[0].clone();
    config.sub_configurations[0]
        .sub_configurations
        .push(duplicate);
    let err = HolidayManager::new(config).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'us'"), "{message}");
    assert!(message.contains("'ak' 2 times"), "{message}");
}

#[test]
fn test_missing_interval_is_an_invalid_argument() {
    let manager = HolidayManager::new(sample_configuration()).unwrap();
    let err = manager.holidays_in_interval(None, &[]).unwrap_err();
    assert!(matches!(err, hc_core::Error::InvalidArgument(_)));
}

#[test]
fn test_interval_filters_by_date() {
    let manager = HolidayManager::new(sample_configuration()).unwrap();
    // March through August 2024 under us/ak: Seward Day and Independence
    // Day are in range, New Year is not.
    let interval = DateInterval::new(date(2024, 3, 1), date(2024, 8, 31)).unwrap();
    let holidays = manager
        .holidays_in_interval(Some(&interval), &["us", "ak"])
        .unwrap();
    assert_eq!(
        keys_of(&holidays),
        HashSet::from(["SEWARD_DAY".to_owned(), "INDEPENDENCE".to_owned()])
    );
}

#[test]
fn test_single_year_interval_equals_filtered_year_query() {
    let manager = HolidayManager::new(sample_configuration()).unwrap();
    let interval = DateInterval::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
    let by_interval = manager
        .holidays_in_interval(Some(&interval), &["us"])
        .unwrap();
    let by_year: HashSet<_> = manager
        .holidays(2024, &["us"])
        .unwrap()
        .into_iter()
        .filter(|h| interval.contains(h.date()))
        .collect();
    assert_eq!(by_interval, by_year);
}

#[test]
fn test_interval_spanning_years() {
    let manager = HolidayManager::new(sample_configuration()).unwrap();
    // December 2023 through January 2024: only the 2024-01-01 New Year
    // record; 2023-01-01 is before the interval.
    let interval = DateInterval::new(date(2023, 12, 1), date(2024, 1, 31)).unwrap();
    let holidays = manager.holidays_in_interval(Some(&interval), &[]).unwrap();
    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays.iter().next().unwrap().date(), date(2024, 1, 1));

    // Widening the start to cover 2023-01-01 picks up the 2023 record.
    let wide = DateInterval::new(date(2023, 1, 1), date(2024, 1, 31)).unwrap();
    let holidays = manager.holidays_in_interval(Some(&wide), &[]).unwrap();
    assert_eq!(
        holidays.iter().map(|h| h.date()).collect::<HashSet<_>>(),
        HashSet::from([date(2023, 1, 1), date(2024, 1, 1)])
    );
}

#[test]
fn test_interval_bounds_are_inclusive() {
    let manager = HolidayManager::new(sample_configuration()).unwrap();
    let exact = DateInterval::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
    let holidays = manager.holidays_in_interval(Some(&exact), &[]).unwrap();
    assert_eq!(holidays.len(), 1);
}

#[test]
fn test_calendar_hierarchy_mirrors_configuration() {
    let manager = HolidayManager::new(sample_configuration()).unwrap();
    let hierarchy = manager.calendar_hierarchy();
    assert_eq!(hierarchy.id(), "root");
    assert_eq!(hierarchy.children().len(), 1);
    let us = &hierarchy.children()["us"];
    assert_eq!(us.fallback_description(), "United States");
    let mut state_ids: Vec<&str> = us.children().keys().map(String::as_str).collect();
    state_ids.sort_unstable();
    assert_eq!(state_ids, ["ak", "al"]);
}
