//! Evaluator for Ethiopian-Orthodox holidays.

use super::RuleEvaluator;
use crate::holiday::Holiday;
use crate::model::{EthiopianOrthodoxHolidayKind, RuleSet};
use crate::validity::is_active;
use hc_core::Result;
use hc_time::coptic::coptic_dates_in_gregorian_year;

/// Properties prefix for Ethiopian-Orthodox holiday names.
const PREFIX_ETHIOPIAN_ORTHODOX: &str = "ethiopian.orthodox.";

/// Coptic (month, day) coordinates of each holiday kind.
fn coordinates(kind: EthiopianOrthodoxHolidayKind) -> (u8, u8) {
    match kind {
        EthiopianOrthodoxHolidayKind::Enkutatash => (1, 1),
        EthiopianOrthodoxHolidayKind::Meskel => (1, 17),
        EthiopianOrthodoxHolidayKind::Timkat => (5, 10),
    }
}

/// Evaluates
/// [`EthiopianOrthodoxHolidayRule`](crate::model::EthiopianOrthodoxHolidayRule)s,
/// reckoned in the Coptic calendar and emitted once per occurrence within
/// the requested Gregorian year.
#[derive(Debug, Clone, Copy, Default)]
pub struct EthiopianOrthodoxHolidayEvaluator;

impl RuleEvaluator for EthiopianOrthodoxHolidayEvaluator {
    fn name(&self) -> &str {
        "ethiopian_orthodox"
    }

    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        for rule in &rules.ethiopian_orthodox {
            if !is_active(&rule.info, year)? {
                continue;
            }
            let (month, day) = coordinates(rule.kind);
            for date in coptic_dates_in_gregorian_year(year, month, day)? {
                let key = format!("{PREFIX_ETHIOPIAN_ORTHODOX}{}", rule.kind.key_name());
                holidays.push(Holiday::new(date, key, rule.info.holiday_type));
            }
        }
        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EthiopianOrthodoxHolidayRule, RuleInfo};
    use hc_time::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn meskel_2024() {
        let rules = RuleSet {
            ethiopian_orthodox: vec![EthiopianOrthodoxHolidayRule {
                kind: EthiopianOrthodoxHolidayKind::Meskel,
                info: RuleInfo::default(),
            }],
            ..RuleSet::default()
        };
        let holidays = EthiopianOrthodoxHolidayEvaluator
            .evaluate(2024, &rules)
            .unwrap();
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].date(), date(2024, 9, 27));
        assert_eq!(
            holidays[0].description_key(),
            "ethiopian.orthodox.MESKEL"
        );
    }
}
