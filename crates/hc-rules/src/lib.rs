//! # hc-rules
//!
//! The holiday rule model and its evaluation machinery: declarative rule
//! definitions grouped into [`model::RuleSet`]s, one evaluator per rule
//! kind, and a [`dispatcher::Dispatcher`] that runs every evaluator against
//! a rule-set for a requested year and collapses the results into a set.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The evaluation dispatcher.
pub mod dispatcher;

/// Rule evaluators, one per rule kind.
pub mod evaluators;

/// `Holiday` — the output record.
pub mod holiday;

/// Configuration and rule data model.
pub mod model;

/// Date substitution for rules with moving conditions.
pub mod mover;

/// Validity-bounds and recurrence-cycle checks shared by all rule kinds.
pub mod validity;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use dispatcher::Dispatcher;
pub use evaluators::RuleEvaluator;
pub use holiday::{Holiday, HolidayType};
pub use model::{Configuration, RuleSet};
