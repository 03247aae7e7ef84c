//! Port interfaces for settings snapshotting
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations. Every read here is a fast,
//! local, synchronous platform query, so the ports are plain sync
//! traits; there is nothing to await and no cancellation to model.

use axsnap_domain::{Capability, CapabilityValue, Result, SettingsSnapshot};

/// Trait for reading live accessibility state from the operating system.
pub trait AccessibilityProvider: Send + Sync {
    /// Read the current value for one capability.
    ///
    /// This must be infallible: a platform that exposes no accessibility
    /// subsystem reports the capability's documented factory default
    /// instead of erroring.
    fn current_value(&self, capability: Capability) -> CapabilityValue;
}

/// Trait for forwarding a snapshot to an analytics pipeline.
///
/// The core knows nothing about delivery, batching, or transport; it only
/// hands over an event name and the flat mapping.
pub trait AnalyticsSink: Send + Sync {
    /// Report one event with its settings payload.
    fn report_event(&self, name: &str, snapshot: &SettingsSnapshot) -> Result<()>;
}
