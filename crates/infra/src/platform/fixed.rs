//! Seeded in-memory accessibility provider
//!
//! Holds per-capability overrides on top of the factory defaults. Serves
//! demos and tests that need a deterministic platform state without a
//! real accessibility subsystem.

use std::collections::HashMap;

use axsnap_core::AccessibilityProvider;
use axsnap_domain::{Capability, CapabilityValue};

/// In-memory provider seeded with a fixed platform state.
#[derive(Debug, Clone, Default)]
pub struct FixedStateProvider {
    overrides: HashMap<Capability, CapabilityValue>,
}

impl FixedStateProvider {
    /// A provider where every capability reads its factory default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one capability with a specific reading.
    pub fn with_value(
        mut self,
        capability: Capability,
        value: impl Into<CapabilityValue>,
    ) -> Self {
        self.overrides.insert(capability, value.into());
        self
    }

    /// Replace one capability's reading on an existing provider.
    pub fn set_value(&mut self, capability: Capability, value: impl Into<CapabilityValue>) {
        self.overrides.insert(capability, value.into());
    }
}

impl AccessibilityProvider for FixedStateProvider {
    fn current_value(&self, capability: Capability) -> CapabilityValue {
        self.overrides.get(&capability).cloned().unwrap_or_else(|| capability.default_value())
    }
}
