//! Dynamic-type (preferred content size) tiers
//!
//! The rendered strings carry a two-digit prefix so that plain
//! lexicographic sorting in any analytics tool reproduces the semantic
//! size order, smallest to largest.

use serde::{Deserialize, Serialize};

/// One recognized dynamic-type size tier, or a carrier for a tier the
/// platform reports that this table does not know yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentSizeCategory {
    Unspecified,
    ExtraSmall,
    Small,
    Medium,
    /// The platform factory default tier.
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
    /// A tier identifier this library does not recognize. Rendered as a
    /// sentinel string instead of failing, so reporting stays non-blocking
    /// when the platform introduces a new tier.
    Unrecognized(String),
}

impl ContentSizeCategory {
    /// Every recognized tier, in semantic size order.
    pub const RECOGNIZED: [ContentSizeCategory; 13] = [
        ContentSizeCategory::Unspecified,
        ContentSizeCategory::ExtraSmall,
        ContentSizeCategory::Small,
        ContentSizeCategory::Medium,
        ContentSizeCategory::Large,
        ContentSizeCategory::ExtraLarge,
        ContentSizeCategory::ExtraExtraLarge,
        ContentSizeCategory::ExtraExtraExtraLarge,
        ContentSizeCategory::AccessibilityMedium,
        ContentSizeCategory::AccessibilityLarge,
        ContentSizeCategory::AccessibilityExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraExtraLarge,
    ];

    /// Canonical string form used in analytics payloads.
    ///
    /// The two-digit prefix is the sole sort key; the rest of the string is
    /// the human-readable label plus the signed offset from the default
    /// tier. Unrecognized tiers get the `99` sentinel prefix so they sort
    /// after every known tier and stand out in dashboards.
    pub fn render(&self) -> String {
        match self {
            ContentSizeCategory::Unspecified => "00 unspecified".to_string(),
            ContentSizeCategory::ExtraSmall => "01 XS extra small (-3)".to_string(),
            ContentSizeCategory::Small => "02 S small (-2)".to_string(),
            ContentSizeCategory::Medium => "03 M medium (-1)".to_string(),
            ContentSizeCategory::Large => "04 L large (default)".to_string(),
            ContentSizeCategory::ExtraLarge => "05 XL extra large (+1)".to_string(),
            ContentSizeCategory::ExtraExtraLarge => "06 XXL extra extra large (+2)".to_string(),
            ContentSizeCategory::ExtraExtraExtraLarge => {
                "07 XXXL extra extra extra large (+3)".to_string()
            }
            ContentSizeCategory::AccessibilityMedium => {
                "08 AX1 accessibility medium (+4)".to_string()
            }
            ContentSizeCategory::AccessibilityLarge => {
                "09 AX2 accessibility large (+5)".to_string()
            }
            ContentSizeCategory::AccessibilityExtraLarge => {
                "10 AX3 accessibility extra large (+6)".to_string()
            }
            ContentSizeCategory::AccessibilityExtraExtraLarge => {
                "11 AX4 accessibility extra extra large (+7)".to_string()
            }
            ContentSizeCategory::AccessibilityExtraExtraExtraLarge => {
                "12 AX5 accessibility extra extra extra large (+8)".to_string()
            }
            ContentSizeCategory::Unrecognized(raw) => format!("99 unrecognized ({raw})"),
        }
    }
}

impl std::fmt::Display for ContentSizeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
