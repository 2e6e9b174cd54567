//! Evaluator for Islamic-calendar holidays.

use super::RuleEvaluator;
use crate::holiday::Holiday;
use crate::model::{IslamicHolidayKind, RuleSet};
use crate::validity::is_active;
use hc_core::Result;
use hc_time::islamic::islamic_dates_in_gregorian_year;

/// Properties prefix for Islamic holiday names.
const PREFIX_ISLAMIC: &str = "islamic.";

/// Islamic (month, day) coordinates of each holiday kind.
fn coordinates(kind: IslamicHolidayKind) -> (u8, u8) {
    match kind {
        IslamicHolidayKind::NewYear => (1, 1),
        IslamicHolidayKind::Aschura => (1, 10),
        IslamicHolidayKind::MawlidAnNabi => (3, 12),
        IslamicHolidayKind::LailatAlMiraj => (7, 27),
        IslamicHolidayKind::LailatAlBarat => (8, 15),
        IslamicHolidayKind::Ramadan => (9, 1),
        IslamicHolidayKind::LailatAlQadr => (9, 27),
        IslamicHolidayKind::IdAlFitr => (10, 1),
        IslamicHolidayKind::IdUlAdha => (12, 10),
    }
}

/// Evaluates [`IslamicHolidayRule`](crate::model::IslamicHolidayRule)s.
///
/// The Islamic year drifts through the Gregorian one, so a single rule can
/// yield zero, one, or two occurrences per requested year; one record is
/// emitted per occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct IslamicHolidayEvaluator;

impl RuleEvaluator for IslamicHolidayEvaluator {
    fn name(&self) -> &str {
        "islamic"
    }

    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        for rule in &rules.islamic {
            if !is_active(&rule.info, year)? {
                continue;
            }
            let (month, day) = coordinates(rule.kind);
            for date in islamic_dates_in_gregorian_year(year, month, day)? {
                let key = format!("{PREFIX_ISLAMIC}{}", rule.kind.key_name());
                holidays.push(Holiday::new(date, key, rule.info.holiday_type));
            }
        }
        Ok(holidays)
    }
}
