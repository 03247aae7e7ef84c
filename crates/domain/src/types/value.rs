//! Tagged capability reading
//!
//! Non-default detection compares the *rendered* forms of two values, so
//! the canonical rendering here is load-bearing: two readings that render
//! identically are treated as equal regardless of their raw representation.

use serde::{Deserialize, Serialize};

use super::content_size::ContentSizeCategory;

/// The discriminated result of reading one capability from the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityValue {
    /// An on/off accessibility toggle.
    Flag(bool),
    /// The preferred dynamic-type tier (text-size capability only).
    ContentSize(ContentSizeCategory),
}

impl CapabilityValue {
    /// Canonical string form used in analytics payloads.
    pub fn render(&self) -> String {
        match self {
            CapabilityValue::Flag(flag) => flag.to_string(),
            CapabilityValue::ContentSize(tier) => tier.render(),
        }
    }
}

impl std::fmt::Display for CapabilityValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<bool> for CapabilityValue {
    fn from(flag: bool) -> Self {
        CapabilityValue::Flag(flag)
    }
}

impl From<ContentSizeCategory> for CapabilityValue {
    fn from(tier: ContentSizeCategory) -> Self {
        CapabilityValue::ContentSize(tier)
    }
}
