//! The closed accessibility capability set and its registry
//!
//! Each capability carries three static facts: the stable key it reports
//! under, the category it belongs to, and the platform factory default.
//! They live in one immutable registry table rather than scattered match
//! arms; a test pins the table to the enum declaration order.
//!
//! The default column is a hand-maintained mirror of the platform's
//! out-of-box state. If a future OS release changes a factory default the
//! table drifts silently and under- or over-reports customized users, so
//! changes there need a source, not a guess.

use serde::{Deserialize, Serialize};

use super::content_size::ContentSizeCategory;
use super::value::CapabilityValue;

/// One observable accessibility toggle or setting.
///
/// The set is closed and fixed at build time; there is no dynamic
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    AssistiveTouch,
    VoiceOver,
    SwitchControl,
    ShakeToUndo,
    ClosedCaptioning,
    BoldText,
    DarkerSystemColors,
    Grayscale,
    GuidedAccess,
    InvertColors,
    MonoAudio,
    ReduceMotion,
    ReduceTransparency,
    SpeakScreen,
    SpeakSelection,
    /// Also known as "Dynamic Type".
    PreferredContentSize,
}

/// Fixed grouping of capabilities for summary reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Audio,
    Interaction,
    Visual,
}

impl Category {
    /// Every category, in summary-reporting order.
    pub const ALL: [Category; 3] = [Category::Audio, Category::Interaction, Category::Visual];

    /// Snapshot key for this category's "any capability non-default?" flag.
    ///
    /// Lives in the `a11y: ` namespace so it can never collide with a
    /// per-capability reporting key.
    pub fn summary_key(self) -> &'static str {
        match self {
            Category::Audio => "a11y: audio non-default?",
            Category::Interaction => "a11y: interaction non-default?",
            Category::Visual => "a11y: visual non-default?",
        }
    }
}

/// Static facts attached to one capability.
#[derive(Debug, Clone)]
pub struct CapabilityDescriptor {
    /// The capability this row describes; pinned to the row index by test.
    pub capability: Capability,
    /// Stable key used in reporting output.
    pub analytics_key: &'static str,
    /// The summary category this capability belongs to.
    pub category: Category,
    /// The platform's un-customized value.
    pub default_value: CapabilityValue,
}

/// Registry of every capability, in `Capability` declaration order.
static REGISTRY: [CapabilityDescriptor; 16] = [
    CapabilityDescriptor {
        capability: Capability::AssistiveTouch,
        analytics_key: "assistiveTouchEnabled",
        category: Category::Interaction,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::VoiceOver,
        analytics_key: "voiceOverEnabled",
        category: Category::Audio,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::SwitchControl,
        analytics_key: "switchControlEnabled",
        category: Category::Interaction,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::ShakeToUndo,
        analytics_key: "shakeToUndoEnabled",
        category: Category::Interaction,
        // The one toggle the platform ships enabled.
        default_value: CapabilityValue::Flag(true),
    },
    CapabilityDescriptor {
        capability: Capability::ClosedCaptioning,
        analytics_key: "closedCaptioningEnabled",
        category: Category::Audio,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::BoldText,
        analytics_key: "boldTextEnabled",
        category: Category::Visual,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::DarkerSystemColors,
        analytics_key: "darkerSystemColorsEnabled",
        category: Category::Visual,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::Grayscale,
        analytics_key: "grayscaleEnabled",
        category: Category::Visual,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::GuidedAccess,
        analytics_key: "guidedAccessEnabled",
        category: Category::Interaction,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::InvertColors,
        analytics_key: "invertColorsEnabled",
        category: Category::Visual,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::MonoAudio,
        analytics_key: "monoAudioEnabled",
        category: Category::Audio,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::ReduceMotion,
        analytics_key: "reduceMotionEnabled",
        category: Category::Visual,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::ReduceTransparency,
        analytics_key: "reduceTransparencyEnabled",
        category: Category::Visual,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::SpeakScreen,
        analytics_key: "speakScreenEnabled",
        category: Category::Audio,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::SpeakSelection,
        analytics_key: "speakSelectionEnabled",
        category: Category::Audio,
        default_value: CapabilityValue::Flag(false),
    },
    CapabilityDescriptor {
        capability: Capability::PreferredContentSize,
        analytics_key: "preferredContentSize",
        category: Category::Visual,
        default_value: CapabilityValue::ContentSize(ContentSizeCategory::Large),
    },
];

impl Capability {
    /// Every supported capability, in declaration order.
    pub const ALL: [Capability; 16] = [
        Capability::AssistiveTouch,
        Capability::VoiceOver,
        Capability::SwitchControl,
        Capability::ShakeToUndo,
        Capability::ClosedCaptioning,
        Capability::BoldText,
        Capability::DarkerSystemColors,
        Capability::Grayscale,
        Capability::GuidedAccess,
        Capability::InvertColors,
        Capability::MonoAudio,
        Capability::ReduceMotion,
        Capability::ReduceTransparency,
        Capability::SpeakScreen,
        Capability::SpeakSelection,
        Capability::PreferredContentSize,
    ];

    /// The registry row for this capability.
    pub fn descriptor(self) -> &'static CapabilityDescriptor {
        &REGISTRY[self as usize]
    }

    /// Stable key used in reporting output.
    pub fn analytics_key(self) -> &'static str {
        self.descriptor().analytics_key
    }

    /// The summary category this capability belongs to.
    pub fn category(self) -> Category {
        self.descriptor().category
    }

    /// The platform's un-customized value for this capability.
    pub fn default_value(self) -> CapabilityValue {
        self.descriptor().default_value.clone()
    }
}
