//! Evaluator for rules at a day offset from Easter Sunday.

use super::RuleEvaluator;
use crate::holiday::Holiday;
use crate::model::RuleSet;
use crate::validity::is_active;
use hc_core::Result;
use hc_time::easter::easter_sunday_for;

/// Properties prefix for Christian holiday names.
pub(super) const PREFIX_CHRISTIAN: &str = "christian.";

/// Evaluates
/// [`RelativeToEasterRule`](crate::model::RelativeToEasterRule)s: Easter
/// Sunday under the rule's chronology plus a signed day offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeToEasterSundayEvaluator;

impl RuleEvaluator for RelativeToEasterSundayEvaluator {
    fn name(&self) -> &str {
        "relative_to_easter_sunday"
    }

    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        for rule in &rules.relative_to_easter_sunday {
            if !is_active(&rule.info, year)? {
                continue;
            }
            let easter_sunday = easter_sunday_for(year, rule.chronology)?;
            let date = easter_sunday.add_days(rule.days as i32)?;
            let key = format!("{PREFIX_CHRISTIAN}{}", rule.info.effective_key());
            holidays.push(Holiday::new(date, key, rule.info.holiday_type));
        }
        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RelativeToEasterRule, RuleInfo};
    use hc_time::{Chronology, Date};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn rule(days: i16, chronology: Chronology) -> RelativeToEasterRule {
        RelativeToEasterRule {
            days,
            chronology,
            info: RuleInfo {
                description_key: Some("ASCENSION_DAY".into()),
                ..RuleInfo::default()
            },
        }
    }

    #[test]
    fn ascension_day_2024() {
        // Easter Sunday 2024-03-31 plus 39 days.
        let rules = RuleSet {
            relative_to_easter_sunday: vec![rule(39, Chronology::Default)],
            ..RuleSet::default()
        };
        let holidays = RelativeToEasterSundayEvaluator
            .evaluate(2024, &rules)
            .unwrap();
        assert_eq!(holidays[0].date(), date(2024, 5, 9));
        assert_eq!(holidays[0].description_key(), "christian.ASCENSION_DAY");
    }

    #[test]
    fn negative_offset_under_julian_chronology() {
        // Orthodox Good Friday 2024: May 5 minus 2 days.
        let rules = RuleSet {
            relative_to_easter_sunday: vec![rule(-2, Chronology::Julian)],
            ..RuleSet::default()
        };
        let holidays = RelativeToEasterSundayEvaluator
            .evaluate(2024, &rules)
            .unwrap();
        assert_eq!(holidays[0].date(), date(2024, 5, 3));
    }
}
