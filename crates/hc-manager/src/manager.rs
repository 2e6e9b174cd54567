//! `HolidayManager` — the query entry point.

use crate::hierarchy::CalendarHierarchy;
use crate::validator::validate_hierarchy;
use hc_core::{Error, Result};
use hc_rules::{Configuration, Dispatcher, Holiday};
use hc_time::DateInterval;
use std::collections::HashSet;
use tracing::debug;

/// Computes holiday sets from a validated configuration hierarchy.
///
/// The manager owns the configuration tree and one [`Dispatcher`] reused
/// across queries.  Construction validates the tree eagerly; a defective
/// tree never becomes queryable.  Queries borrow the manager immutably, so
/// independent queries may run concurrently without coordination.
#[derive(Debug)]
pub struct HolidayManager {
    configuration: Configuration,
    dispatcher: Dispatcher,
}

impl HolidayManager {
    /// Create a manager with the built-in evaluator list.
    ///
    /// Fails with a configuration error if the hierarchy contains duplicate
    /// sibling ids.
    pub fn new(configuration: Configuration) -> Result<Self> {
        Self::with_dispatcher(configuration, Dispatcher::new())
    }

    /// Create a manager with a caller-assembled dispatcher, honoring the
    /// evaluator-injection extension point.
    pub fn with_dispatcher(configuration: Configuration, dispatcher: Dispatcher) -> Result<Self> {
        validate_hierarchy(&configuration)?;
        Ok(Self {
            configuration,
            dispatcher,
        })
    }

    /// The configuration tree this manager answers queries from.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Compute the holiday set for `year` along the given hierarchy path.
    ///
    /// Starting at the root, each node's rule-set is evaluated and merged;
    /// path segments are consumed head-first and matched against child ids
    /// case-insensitively.  A segment with no matching child stops the
    /// descent silently: the result accumulated so far is returned and the
    /// remaining segments are ignored.
    pub fn holidays(&self, year: u16, path: &[&str]) -> Result<HashSet<Holiday>> {
        let mut holidays = HashSet::new();
        let mut node = &self.configuration;
        let mut remaining = path;
        loop {
            debug!(
                hierarchy = %node.hierarchy,
                year,
                "adding holidays for {}",
                node.description
            );
            holidays.extend(self.dispatcher.dispatch(year, &node.holidays)?);
            let Some((head, rest)) = remaining.split_first() else {
                break;
            };
            match node
                .sub_configurations
                .iter()
                .find(|sub| sub.hierarchy.eq_ignore_ascii_case(head))
            {
                Some(child) => {
                    node = child;
                    remaining = rest;
                }
                None => {
                    debug!(segment = %head, "no matching sub-configuration, stopping descent");
                    break;
                }
            }
        }
        Ok(holidays)
    }

    /// Compute the holiday set for every year touched by `interval`,
    /// keeping only records whose date lies within the interval's bounds
    /// (both inclusive).
    ///
    /// Fails with an invalid-argument error if no interval is given; no
    /// partial result is produced.
    pub fn holidays_in_interval(
        &self,
        interval: Option<&DateInterval>,
        path: &[&str],
    ) -> Result<HashSet<Holiday>> {
        let interval = interval
            .ok_or_else(|| Error::InvalidArgument("no interval given".into()))?;
        let mut holidays = HashSet::new();
        for year in interval.start().year()..=interval.end().year() {
            let year_holidays = self.holidays(year, path)?;
            holidays.extend(
                year_holidays
                    .into_iter()
                    .filter(|holiday| interval.contains(holiday.date())),
            );
        }
        Ok(holidays)
    }

    /// Mirror the configuration tree into a [`CalendarHierarchy`].
    pub fn calendar_hierarchy(&self) -> CalendarHierarchy {
        CalendarHierarchy::from_configuration(&self.configuration)
    }
}
