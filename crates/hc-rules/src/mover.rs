//! Date substitution for rules with moving conditions.

use crate::model::{MoveDirection, MovingCondition};
use hc_core::Result;
use hc_time::Date;

/// Apply the first matching moving condition to `date`.
///
/// Conditions are tried in declaration order; the first whose trigger
/// weekday equals the date's weekday replaces the date by stepping one day
/// at a time in the condition's direction until the target weekday is
/// reached, and no further conditions are considered.  With no matching
/// condition the date is returned unchanged.
pub fn move_date(conditions: &[MovingCondition], mut date: Date) -> Result<Date> {
    for condition in conditions {
        if date.weekday() == condition.substitute {
            let step = match condition.with {
                MoveDirection::Next => 1,
                MoveDirection::Previous => -1,
            };
            while date.weekday() != condition.weekday {
                date = date.add_days(step)?;
            }
            break;
        }
    }
    Ok(date)
}
