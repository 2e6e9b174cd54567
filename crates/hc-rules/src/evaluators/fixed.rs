//! Evaluator for fixed-date rules.

use super::RuleEvaluator;
use crate::holiday::Holiday;
use crate::model::RuleSet;
use crate::mover::move_date;
use crate::validity::is_active;
use hc_core::Result;

/// Evaluates [`FixedRule`](crate::model::FixedRule)s: the configured
/// month/day in the requested year, substituted by the rule's moving
/// conditions where they apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedEvaluator;

impl RuleEvaluator for FixedEvaluator {
    fn name(&self) -> &str {
        "fixed"
    }

    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        for rule in &rules.fixed {
            if !is_active(&rule.info, year)? {
                continue;
            }
            let date = rule.date.resolve(year)?;
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
