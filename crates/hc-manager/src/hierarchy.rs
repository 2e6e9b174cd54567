//! `CalendarHierarchy` — the mirrored configuration tree.

use hc_rules::Configuration;
use std::collections::HashMap;

/// A read-only mirror of the configuration hierarchy, carrying ids and
/// fallback descriptions but no rules.
///
/// Callers use it to discover which hierarchy paths can be passed to
/// [`HolidayManager::holidays`](crate::manager::HolidayManager::holidays).
/// Built fresh per query; immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarHierarchy {
    id: String,
    fallback_description: String,
    children: HashMap<String, CalendarHierarchy>,
}

impl CalendarHierarchy {
    /// Recursively mirror a configuration tree.
    pub fn from_configuration(configuration: &Configuration) -> Self {
        Self {
            id: configuration.hierarchy.clone(),
            fallback_description: configuration.description.clone(),
            children: configuration
                .sub_configurations
                .iter()
                .map(|sub| (sub.hierarchy.clone(), Self::from_configuration(sub)))
                .collect(),
        }
    }

    /// The hierarchy id of this node.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Description used when no localized name is available.
    pub fn fallback_description(&self) -> &str {
        &self.fallback_description
    }

    /// Child nodes keyed by hierarchy id.
    pub fn children(&self) -> &HashMap<String, CalendarHierarchy> {
        &self.children
    }
}
