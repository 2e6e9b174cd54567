//! Evaluator for rules relative to a fixed date.

use super::RuleEvaluator;
use crate::holiday::Holiday;
use crate::model::{RuleSet, Shift, When};
use crate::validity::is_active;
use hc_core::Result;

/// Evaluates [`RelativeToFixedRule`](crate::model::RelativeToFixedRule)s:
/// from the anchor date, either step to the nearest occurrence of the
/// configured weekday or advance by a fixed day count, in the configured
/// direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeToFixedEvaluator;

impl RuleEvaluator for RelativeToFixedEvaluator {
    fn name(&self) -> &str {
        "relative_to_fixed"
    }

    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        for rule in &rules.relative_to_fixed {
            if !is_active(&rule.info, year)? {
                continue;
            }
            let direction = match rule.when {
                When::Before => -1,
                When::After => 1,
            };
            let mut date = rule.date.resolve(year)?;
            match rule.shift {
                Shift::Weekday(weekday) => {
                    // Steps off the anchor first: an anchor already on the
                    // target weekday shifts a full week.
                    loop {
                        date = date.add_days(direction)?;
                        if date.weekday() == weekday {
                            break;
                        }
                    }
                }
                Shift::Days(days) => {
                    date = date.add_days(direction * days as i32)?;
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
