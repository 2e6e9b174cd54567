//! The evaluation dispatcher.

use crate::evaluators::{default_evaluators, RuleEvaluator};
use crate::holiday::Holiday;
use crate::model::RuleSet;
use hc_core::Result;
use std::collections::HashSet;

/// Runs every registered rule evaluator against one rule-set and year and
/// unions their outputs into a single set.
///
/// The evaluator list is fixed at construction: [`Dispatcher::new`]
/// installs the built-in list, [`Dispatcher::with_evaluators`] accepts a
/// caller-assembled one (replacement or extension of the built-ins).  The
/// dispatcher owns no other state and is reused across queries.
///
/// A configuration error raised by any evaluator (defective cycle
/// descriptor) aborts the whole dispatch; no partial set is returned.
pub struct Dispatcher {
    evaluators: Vec<Box<dyn RuleEvaluator>>,
}

impl Dispatcher {
    /// Create a dispatcher with the built-in evaluator list.
    pub fn new() -> Self {
        Self::with_evaluators(default_evaluators())
    }

    /// Create a dispatcher with a caller-assembled evaluator list.
    pub fn with_evaluators(evaluators: Vec<Box<dyn RuleEvaluator>>) -> Self {
        Self { evaluators }
    }

    /// Evaluate every rule in `rules` for `year`.
    ///
    /// Duplicate records produced by different evaluators collapse under
    /// the set's (date, description key, type) equality.
    pub fn dispatch(&self, year: u16, rules: &RuleSet) -> Result<HashSet<Holiday>> {
        let mut holidays = HashSet::new();
        for evaluator in &self.evaluators {
            holidays.extend(evaluator.evaluate(year, rules)?);
        }
        Ok(holidays)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.evaluators.iter().map(|e| e.name()).collect();
        f.debug_struct("Dispatcher").field("evaluators", &names).finish()
    }
}
