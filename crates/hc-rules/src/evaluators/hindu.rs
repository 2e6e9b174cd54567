//! Evaluator for Hindu holidays.

use super::RuleEvaluator;
use crate::holiday::Holiday;
use crate::model::{HinduHolidayKind, RuleSet};
use crate::validity::is_active;
use hc_core::Result;

/// Evaluates [`HinduHolidayRule`](crate::model::HinduHolidayRule)s.
///
/// Recognized kinds are validity-checked but no dates are produced yet:
/// the lunisolar Hindu calendar has no tabular arithmetic comparable to
/// the Islamic or Coptic chronologies, and none is shipped here.
#[derive(Debug, Clone, Copy, Default)]
pub struct HinduHolidayEvaluator;

impl RuleEvaluator for HinduHolidayEvaluator {
    fn name(&self) -> &str {
        "hindu"
    }

    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>> {
        for rule in &rules.hindu {
            if !is_active(&rule.info, year)? {
                continue;
            }
            match rule.kind {
                HinduHolidayKind::Holi => {
                    // TODO: compute Holi from the Phalguna full moon once a
                    // lunisolar chronology module exists.
                }
            }
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HinduHolidayRule, RuleInfo};

    #[test]
    fn holi_yields_no_dates() {
        let rules = RuleSet {
            hindu: vec![HinduHolidayRule {
                kind: HinduHolidayKind::Holi,
                info: RuleInfo::default(),
            }],
            ..RuleSet::default()
        };
        assert!(HinduHolidayEvaluator.evaluate(2024, &rules).unwrap().is_empty());
    }

    #[test]
    fn defective_cycle_still_errors() {
        let rules = RuleSet {
            hindu: vec![HinduHolidayRule {
                kind: HinduHolidayKind::Holi,
                info: RuleInfo {
                    every: Some("X_YEARS".into()),
                    ..RuleInfo::default()
                },
            }],
            ..RuleSet::default()
        };
        assert!(HinduHolidayEvaluator.evaluate(2024, &rules).is_err());
    }
}
