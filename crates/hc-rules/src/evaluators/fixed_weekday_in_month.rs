//! Evaluator for Nth/last-weekday-of-month rules.

use super::RuleEvaluator;
use crate::holiday::Holiday;
use crate::model::RuleSet;
use crate::mover::move_date;
use crate::validity::is_active;
use hc_core::Result;

/// Evaluates
/// [`FixedWeekdayInMonthRule`](crate::model::FixedWeekdayInMonthRule)s:
/// the Nth (or last) occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWeekdayInMonthEvaluator;

impl RuleEvaluator for FixedWeekdayInMonthEvaluator {
    fn name(&self) -> &str {
        "fixed_weekday_in_month"
    }

    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        for rule in &rules.fixed_weekday_in_month {
            if !is_active(&rule.info, year)? {
                continue;
            }
            let date = rule.fixed_weekday.resolve(year)?;
            let moved = move_date(&rule.moving_conditions, date)?;
            holidays.push(Holiday::new(
                moved,
                rule.info.effective_key(),
                rule.info.holiday_type,
            ));
        }
        Ok(holidays)
    }
}
