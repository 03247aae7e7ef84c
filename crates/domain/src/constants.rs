//! Domain constants shared across crates

/// Event name for a full accessibility settings report.
pub const EVENT_ACCESSIBILITY_SETTINGS: &str = "accessibility_settings";

/// Event name for a text-size-only report.
pub const EVENT_ACCESSIBILITY_SETTINGS_FONT: &str = "accessibility_settings_font";

/// Key namespace reserved for summary entries.
///
/// Capability reporting keys are plain camelCase identifiers and never
/// start with this prefix, so summary and per-capability keys cannot
/// collide inside one snapshot.
pub const SUMMARY_KEY_PREFIX: &str = "a11y: ";

/// Snapshot key for the overall "any requested capability customized?" flag.
pub const OVERALL_SUMMARY_KEY: &str = "a11y: anything enabled?";
