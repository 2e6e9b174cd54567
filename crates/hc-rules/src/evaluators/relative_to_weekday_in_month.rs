//! Evaluator for nearest-weekday-to-weekday-in-month rules.

use super::RuleEvaluator;
use crate::holiday::Holiday;
use crate::model::{RuleSet, When};
use crate::validity::is_active;
use hc_core::Result;

/// Evaluates
/// [`RelativeToWeekdayInMonthRule`](crate::model::RelativeToWeekdayInMonthRule)s:
/// the nearest occurrence of the configured weekday before or after a
/// weekday-in-month anchor, such as "the Tuesday after the first Monday of
/// November".
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeToWeekdayInMonthEvaluator;

impl RuleEvaluator for RelativeToWeekdayInMonthEvaluator {
    fn name(&self) -> &str {
        "relative_to_weekday_in_month"
    }

    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        for rule in &rules.relative_to_weekday_in_month {
            if !is_active(&rule.info, year)? {
                continue;
            }
            let direction = match rule.when {
                When::Before => -1,
                When::After => 1,
            };
            let mut date = rule.fixed_weekday.resolve(year)?;
            while date.weekday() != rule.weekday {
                date = date.add_days(direction)?;
            }
            holidays.push(Holiday::new(
                date,
                rule.info.effective_key(),
                rule.info.holiday_type,
            ));
        }
        Ok(holidays)
    }
}
