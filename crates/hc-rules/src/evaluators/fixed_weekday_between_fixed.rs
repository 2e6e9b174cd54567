//! Evaluator for first-weekday-within-range rules.

use super::RuleEvaluator;
use crate::holiday::Holiday;
use crate::model::RuleSet;
use crate::validity::is_active;
use hc_core::Result;

/// Evaluates
/// [`FixedWeekdayBetweenFixedRule`](crate::model::FixedWeekdayBetweenFixedRule)s:
/// the first occurrence of the configured weekday between two fixed dates,
/// bounds inclusive.  A range containing no such weekday yields no holiday.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWeekdayBetweenFixedEvaluator;

impl RuleEvaluator for FixedWeekdayBetweenFixedEvaluator {
    fn name(&self) -> &str {
        "fixed_weekday_between_fixed"
    }

    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        for rule in &rules.fixed_weekday_between_fixed {
            if !is_active(&rule.info, year)? {
                continue;
            }
            let to = rule.to.resolve(year)?;
            let mut date = rule.from.resolve(year)?;
            while date <= to {
                if date.weekday() == rule.weekday {
                    holidays.push(Holiday::new(
                        date,
                        rule.info.effective_key(),
                        rule.info.holiday_type,
                    ));
                    break;
                }
                date = date.add_days(1)?;
            }
        }
        Ok(holidays)
    }
}
