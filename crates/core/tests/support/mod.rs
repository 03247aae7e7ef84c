//! Shared test helpers for `axsnap-core` integration tests.
//!
//! In-memory implementations of the snapshot ports so tests can script
//! platform state and observe reported events without any real platform
//! or analytics dependency.

use std::collections::HashMap;
use std::sync::Mutex;

use axsnap_core::{AccessibilityProvider, AnalyticsSink};
use axsnap_domain::{
    AxSnapError, Capability, CapabilityValue, Result as DomainResult, SettingsSnapshot,
};

/// Scripted platform state: defaults everywhere except the seeded overrides.
#[derive(Default)]
pub struct ScriptedProvider {
    overrides: HashMap<Capability, CapabilityValue>,
}

impl ScriptedProvider {
    /// A platform where every capability reads its factory default.
    pub fn all_defaults() -> Self {
        Self::default()
    }

    /// Seed one capability with a non-default reading.
    pub fn with_value(mut self, capability: Capability, value: impl Into<CapabilityValue>) -> Self {
        self.overrides.insert(capability, value.into());
        self
    }
}

impl AccessibilityProvider for ScriptedProvider {
    fn current_value(&self, capability: Capability) -> CapabilityValue {
        self.overrides.get(&capability).cloned().unwrap_or_else(|| capability.default_value())
    }
}

/// Records every reported event for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(String, SettingsSnapshot)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events reported so far.
    pub fn events(&self) -> Vec<(String, SettingsSnapshot)> {
        self.events.lock().expect("recording sink lock should not be poisoned").clone()
    }
}

impl AnalyticsSink for RecordingSink {
    fn report_event(&self, name: &str, snapshot: &SettingsSnapshot) -> DomainResult<()> {
        self.events
            .lock()
            .expect("recording sink lock should not be poisoned")
            .push((name.to_string(), snapshot.clone()));
        Ok(())
    }
}

/// A sink whose delivery always fails, for error-propagation tests.
pub struct FailingSink;

impl AnalyticsSink for FailingSink {
    fn report_event(&self, _name: &str, _snapshot: &SettingsSnapshot) -> DomainResult<()> {
        Err(AxSnapError::Analytics("delivery rejected".to_string()))
    }
}
