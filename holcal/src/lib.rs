//! # holcal
//!
//! Hierarchical holiday-rule evaluation: declarative rule definitions are
//! turned into concrete calendar dates for a requested year or interval,
//! with country → region hierarchy lookup.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `hc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holcal::manager::HolidayManager;
//! use holcal::rules::model::{Configuration, FixedDay, FixedRule, RuleInfo, RuleSet};
//! use holcal::time::Month;
//!
//! let configuration = Configuration {
//!     hierarchy: "xx".into(),
//!     description: "Example".into(),
//!     holidays: RuleSet {
//!         fixed: vec![FixedRule {
//!             date: FixedDay { month: Month::May, day: 1 },
//!             moving_conditions: vec![],
//!             info: RuleInfo {
//!                 description_key: Some("LABOUR_DAY".into()),
//!                 ..RuleInfo::default()
//!             },
//!         }],
//!         ..RuleSet::default()
//!     },
//!     sub_configurations: vec![],
//! };
//!
//! let manager = HolidayManager::new(configuration).unwrap();
//! let holidays = manager.holidays(2024, &[]).unwrap();
//! assert_eq!(holidays.len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared definitions.
pub use hc_core as core;

/// Date, weekday, interval, and calendar-chronology arithmetic.
pub use hc_time as time;

/// Rule model, rule evaluators, and the evaluation dispatcher.
pub use hc_rules as rules;

/// Hierarchy orchestrator and validator.
pub use hc_manager as manager;
