//! Evaluator for named Christian feasts.

use super::relative_to_easter_sunday::PREFIX_CHRISTIAN;
use super::RuleEvaluator;
use crate::holiday::Holiday;
use crate::model::{ChristianHolidayKind, RuleSet};
use crate::mover::move_date;
use crate::validity::is_active;
use hc_core::Result;
use hc_time::easter::easter_sunday_for;

/// Day offset of each feast from Easter Sunday.
fn easter_offset(kind: ChristianHolidayKind) -> i32 {
    match kind {
        ChristianHolidayKind::Easter => 0,
        ChristianHolidayKind::CleanMonday | ChristianHolidayKind::ShroveMonday => -48,
        ChristianHolidayKind::MardiGras | ChristianHolidayKind::Carnival => -47,
        ChristianHolidayKind::AshWednesday => -46,
        ChristianHolidayKind::MaundyThursday => -3,
        ChristianHolidayKind::GoodFriday => -2,
        ChristianHolidayKind::EasterSaturday => -1,
        ChristianHolidayKind::EasterMonday => 1,
        ChristianHolidayKind::EasterTuesday => 2,
        ChristianHolidayKind::GeneralPrayerDay => 26,
        ChristianHolidayKind::AscensionDay => 39,
        ChristianHolidayKind::Pentecost | ChristianHolidayKind::WhitSunday => 49,
        ChristianHolidayKind::WhitMonday | ChristianHolidayKind::PentecostMonday => 50,
        ChristianHolidayKind::CorpusChristi => 60,
        ChristianHolidayKind::SacredHeart => 68,
    }
}

/// Evaluates
/// [`ChristianHolidayRule`](crate::model::ChristianHolidayRule)s: the named
/// feast's well-known offset from the chronology-resolved Easter Sunday,
/// substituted by the rule's moving conditions where they apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChristianHolidayEvaluator;

impl RuleEvaluator for ChristianHolidayEvaluator {
    fn name(&self) -> &str {
        "christian"
    }

    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        for rule in &rules.christian {
            if !is_active(&rule.info, year)? {
                continue;
            }
            let easter_sunday = easter_sunday_for(year, rule.chronology)?;
            let date = easter_sunday.add_days(easter_offset(rule.kind))?;
            let moved = move_date(&rule.moving_conditions, date)?;
            let key = format!("{PREFIX_CHRISTIAN}{}", rule.kind.key_name());
            holidays.push(Holiday::new(moved, key, rule.info.holiday_type));
        }
        Ok(holidays)
    }
}
