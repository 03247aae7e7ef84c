//! Settings snapshot service - core business logic
//!
//! Assembles the flat capability-to-rendered-value mapping and the
//! optional "any non-default?" summary flags. Total and side-effect-free
//! beyond the provider reads; two back-to-back calls with unchanged
//! platform state return identical mappings.

use std::sync::Arc;

use axsnap_domain::constants::OVERALL_SUMMARY_KEY;
use axsnap_domain::{Capability, CapabilityValue, Category, SettingsSnapshot};
use tracing::debug;

use super::ports::AccessibilityProvider;

/// Settings snapshot service
pub struct SnapshotService {
    provider: Arc<dyn AccessibilityProvider>,
}

impl SnapshotService {
    /// Create a new snapshot service
    pub fn new(provider: Arc<dyn AccessibilityProvider>) -> Self {
        Self { provider }
    }

    /// Live platform value for one capability.
    pub fn current_value(&self, capability: Capability) -> CapabilityValue {
        self.provider.current_value(capability)
    }

    /// Factory-default value for one capability.
    pub fn default_value(&self, capability: Capability) -> CapabilityValue {
        capability.default_value()
    }

    /// Whether the capability's current value differs from its default.
    ///
    /// Compared on rendered string form: readings that render identically
    /// count as equal even if their raw representations differ.
    pub fn is_non_default(&self, capability: Capability) -> bool {
        self.current_value(capability).render() != capability.default_value().render()
    }

    /// Snapshot every supported capability.
    pub fn full_snapshot(&self, include_summary: bool) -> SettingsSnapshot {
        self.snapshot(&Capability::ALL, include_summary)
    }

    /// Snapshot the requested capabilities into one flat mapping.
    ///
    /// With `include_summary`, adds one overall flag (true iff any
    /// *requested* capability is non-default) plus one flag per category.
    /// Category flags always scan the full capability list, independent of
    /// the requested subset, so a restricted snapshot still reports the
    /// device-wide per-category picture.
    pub fn snapshot(
        &self,
        capabilities: &[Capability],
        include_summary: bool,
    ) -> SettingsSnapshot {
        let mut snapshot = SettingsSnapshot::new();

        if include_summary {
            let any_non_default = capabilities.iter().any(|&c| self.is_non_default(c));
            snapshot.insert(OVERALL_SUMMARY_KEY, CapabilityValue::Flag(any_non_default).render());

            for category in Category::ALL {
                let category_non_default = Capability::ALL
                    .iter()
                    .filter(|c| c.category() == category)
                    .any(|&c| self.is_non_default(c));
                snapshot.insert(
                    category.summary_key(),
                    CapabilityValue::Flag(category_non_default).render(),
                );
            }
        }

        for &capability in capabilities {
            snapshot.insert(capability.analytics_key(), self.current_value(capability).render());
        }

        debug!(
            requested = capabilities.len(),
            entries = snapshot.len(),
            include_summary,
            "captured accessibility settings snapshot"
        );

        snapshot
    }
}
