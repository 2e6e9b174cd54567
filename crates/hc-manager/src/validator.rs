//! Eager configuration-tree validation.
//!
//! Runs once when a [`HolidayManager`](crate::manager::HolidayManager) is
//! constructed, never during a holiday query: a tree that fails validation
//! must not be queryable at all.

use hc_core::fail;
use hc_core::Result;
use hc_rules::Configuration;
use std::collections::BTreeMap;
use tracing::debug;

/// Check that no node of the tree has two direct children sharing a
/// hierarchy id.
///
/// Ids are compared case-insensitively, matching the lookup semantics of
/// the orchestrator's descent.  The error names the parent id and every
/// offending child id with its occurrence count.
pub fn validate_hierarchy(configuration: &Configuration) -> Result<()> {
    debug!(
        hierarchy = %configuration.hierarchy,
        children = configuration.sub_configurations.len(),
        "validating configuration node"
    );
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for sub in &configuration.sub_configurations {
        *counts.entry(sub.hierarchy.to_ascii_lowercase()).or_default() += 1;
    }
    let duplicates: Vec<String> = counts
        .iter()
        .filter(|(_, &count)| count > 1)
        .map(|(id, count)| format!("'{id}' {count} times"))
        .collect();
    if !duplicates.is_empty() {
        fail!(
            "configuration for '{}' contains multiple sub-configurations with the same hierarchy id: {}",
            configuration.hierarchy,
            duplicates.join(", ")
        );
    }
    for sub in &configuration.sub_configurations {
        validate_hierarchy(sub)?;
    }
    Ok(())
}
