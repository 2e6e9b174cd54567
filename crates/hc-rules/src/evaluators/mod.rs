//! Rule evaluators, one per rule kind.
//!
//! Every evaluator is a pure function of (year, rule-set): it filters the
//! rule-set for its own kind, skips rules that are inactive in the
//! requested year, computes the concrete dates, and returns its own
//! sequence of [`Holiday`] records.  Evaluators never communicate and are
//! insensitive to the order they run in; the
//! [`Dispatcher`](crate::dispatcher::Dispatcher) merges their outputs at a
//! single point.

use crate::holiday::Holiday;
use crate::model::RuleSet;
use hc_core::Result;

/// A single rule-kind evaluator.
///
/// Implementations must be pure: no shared mutable state, no ordering
/// dependency on other evaluators, so a dispatcher is free to run them
/// sequentially or on separate worker tasks.
pub trait RuleEvaluator: Send + Sync {
    /// Evaluator name, used in diagnostics.
    fn name(&self) -> &str;

    /// Compute every holiday this evaluator's rule kind yields in `year`.
    fn evaluate(&self, year: u16, rules: &RuleSet) -> Result<Vec<Holiday>>;
}

mod christian;
mod ethiopian_orthodox;
mod fixed;
mod fixed_weekday_between_fixed;
mod fixed_weekday_in_month;
mod fixed_weekday_relative_to_fixed;
mod hindu;
mod islamic;
mod relative_to_easter_sunday;
mod relative_to_fixed;
mod relative_to_weekday_in_month;

pub use christian::ChristianHolidayEvaluator;
pub use ethiopian_orthodox::EthiopianOrthodoxHolidayEvaluator;
pub use fixed::FixedEvaluator;
pub use fixed_weekday_between_fixed::FixedWeekdayBetweenFixedEvaluator;
pub use fixed_weekday_in_month::FixedWeekdayInMonthEvaluator;
pub use fixed_weekday_relative_to_fixed::FixedWeekdayRelativeToFixedEvaluator;
pub use hindu::HinduHolidayEvaluator;
pub use islamic::IslamicHolidayEvaluator;
pub use relative_to_easter_sunday::RelativeToEasterSundayEvaluator;
pub use relative_to_fixed::RelativeToFixedEvaluator;
pub use relative_to_weekday_in_month::RelativeToWeekdayInMonthEvaluator;

/// The fixed list of built-in evaluators, one per rule kind.
pub fn default_evaluators() -> Vec<Box<dyn RuleEvaluator>> {
    vec![
        Box::new(ChristianHolidayEvaluator),
        Box::new(EthiopianOrthodoxHolidayEvaluator),
        Box::new(FixedEvaluator),
        Box::new(FixedWeekdayBetweenFixedEvaluator),
        Box::new(FixedWeekdayInMonthEvaluator),
        Box::new(FixedWeekdayRelativeToFixedEvaluator),
        Box::new(HinduHolidayEvaluator),
        Box::new(IslamicHolidayEvaluator),
        Box::new(RelativeToEasterSundayEvaluator),
        Box::new(RelativeToFixedEvaluator),
        Box::new(RelativeToWeekdayInMonthEvaluator),
    ]
}
