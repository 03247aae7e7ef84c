//! Platform accessibility providers
//!
//! Real platform bindings implement [`axsnap_core::AccessibilityProvider`]
//! against the host accessibility subsystem. A platform that exposes no
//! such subsystem is treated as "all defaults", which is exactly what
//! [`DefaultStateProvider`] reports; it is the shipped provider wherever
//! no native binding exists.

pub mod fixed;

pub use fixed::FixedStateProvider;

use axsnap_core::AccessibilityProvider;
use axsnap_domain::{Capability, CapabilityValue};

/// Accessibility provider for platforms without an accessibility subsystem.
///
/// Every capability reads as its documented factory default, so snapshots
/// taken through this provider always report "nothing customized".
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStateProvider;

impl DefaultStateProvider {
    pub fn new() -> Self {
        Self
    }
}

impl AccessibilityProvider for DefaultStateProvider {
    fn current_value(&self, capability: Capability) -> CapabilityValue {
        capability.default_value()
    }
}
