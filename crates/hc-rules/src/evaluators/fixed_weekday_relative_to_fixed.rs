//! Evaluator for nearest-weekday-to-fixed-date rules.

use super::RuleEvaluator;
use crate::holiday::Holiday;
use crate::model::{RuleSet, When};
use crate::validity::is_active;
use hc_core::Result;

/// Evaluates
/// [`FixedWeekdayRelativeToFixedRule`](crate::model::FixedWeekdayRelativeToFixedRule)s:
/// the nearest occurrence of the configured weekday strictly before or
/// after the anchor date.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWeekdayRelativeToFixedEvaluator;

impl RuleEvaluator for FixedWeekdayRelativeToFixedEvaluator {
    fn name(&self) -> &str {
        "fixed_weekday_relative_to_fixed"
    }

    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        for rule in &rules.fixed_weekday_relative_to_fixed {
            if !is_active(&rule.info, year)? {
                continue;
            }
            let direction = match rule.when {
                When::Before => -1,
                When::After => 1,
            };
            let mut date = rule.date.resolve(year)?;
            loop {
                date = date.add_days(direction)?;
                if date.weekday() == rule.weekday {
                    break;
                }
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
