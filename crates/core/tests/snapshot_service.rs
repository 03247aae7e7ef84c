//! Integration tests for the snapshot service
//!
//! Scenario coverage for snapshot assembly, default-deviation detection,
//! and the summary flags, driven through scripted platform state.

mod support;

use std::sync::Arc;

use axsnap_core::SnapshotService;
use axsnap_domain::constants::OVERALL_SUMMARY_KEY;
use axsnap_domain::{Capability, Category, ContentSizeCategory};
use support::ScriptedProvider;

fn service(provider: ScriptedProvider) -> SnapshotService {
    SnapshotService::new(Arc::new(provider))
}

#[test]
fn all_default_platform_reports_every_summary_flag_false() {
    let service = service(ScriptedProvider::all_defaults());

    let snapshot = service.full_snapshot(true);

    assert_eq!(snapshot.get(OVERALL_SUMMARY_KEY), Some("false"));
    for category in Category::ALL {
        assert_eq!(snapshot.get(category.summary_key()), Some("false"), "{category:?}");
    }
    // 16 capability entries plus the overall flag and one flag per category.
    assert_eq!(snapshot.len(), Capability::ALL.len() + 1 + Category::ALL.len());
}

/// Only the text size is customized (extra large instead of large): the
/// visual category flag and the overall flag light up, audio and
/// interaction stay false, and the entry itself renders the XL tier.
#[test]
fn customized_text_size_lights_up_visual_and_overall_flags() {
    let provider = ScriptedProvider::all_defaults()
        .with_value(Capability::PreferredContentSize, ContentSizeCategory::ExtraLarge);
    let service = service(provider);

    let snapshot = service.full_snapshot(true);

    assert_eq!(snapshot.get("preferredContentSize"), Some("05 XL extra large (+1)"));
    assert_eq!(snapshot.get(Category::Visual.summary_key()), Some("true"));
    assert_eq!(snapshot.get(Category::Audio.summary_key()), Some("false"));
    assert_eq!(snapshot.get(Category::Interaction.summary_key()), Some("false"));
    assert_eq!(snapshot.get(OVERALL_SUMMARY_KEY), Some("true"));
}

#[test]
fn subset_snapshot_without_summary_has_exactly_one_entry() {
    let service = service(ScriptedProvider::all_defaults());

    let snapshot = service.snapshot(&[Capability::PreferredContentSize], false);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get("preferredContentSize"), Some("04 L large (default)"));
}

/// Category flags always scan the full capability list, while the overall
/// flag is scoped to the requested subset. A bold-text-only snapshot on a
/// device with VoiceOver enabled therefore reports overall=false but
/// audio=true.
#[test]
fn category_flags_scan_full_list_while_overall_tracks_the_subset() {
    let provider = ScriptedProvider::all_defaults().with_value(Capability::VoiceOver, true);
    let service = service(provider);

    let snapshot = service.snapshot(&[Capability::BoldText], true);

    assert_eq!(snapshot.get(OVERALL_SUMMARY_KEY), Some("false"));
    assert_eq!(snapshot.get(Category::Audio.summary_key()), Some("true"));
    assert_eq!(snapshot.get(Category::Interaction.summary_key()), Some("false"));
    assert_eq!(snapshot.get(Category::Visual.summary_key()), Some("false"));
    assert_eq!(snapshot.get("boldTextEnabled"), Some("false"));
}

#[test]
fn back_to_back_snapshots_are_identical() {
    let provider = ScriptedProvider::all_defaults()
        .with_value(Capability::ReduceMotion, true)
        .with_value(Capability::PreferredContentSize, ContentSizeCategory::AccessibilityMedium);
    let service = service(provider);

    let first = service.full_snapshot(true);
    let second = service.full_snapshot(true);

    assert_eq!(first, second);
}

#[test]
fn shake_to_undo_disabled_counts_as_non_default() {
    // The one capability whose factory default is `true`.
    let provider = ScriptedProvider::all_defaults().with_value(Capability::ShakeToUndo, false);
    let service = service(provider);

    assert!(service.is_non_default(Capability::ShakeToUndo));

    let snapshot = service.full_snapshot(true);
    assert_eq!(snapshot.get("shakeToUndoEnabled"), Some("false"));
    assert_eq!(snapshot.get(Category::Interaction.summary_key()), Some("true"));
    assert_eq!(snapshot.get(OVERALL_SUMMARY_KEY), Some("true"));
}

/// A tier this library does not recognize degrades to the sentinel string
/// and still counts as non-default; nothing fails.
#[test]
fn unrecognized_content_size_degrades_to_sentinel() {
    let provider = ScriptedProvider::all_defaults().with_value(
        Capability::PreferredContentSize,
        ContentSizeCategory::Unrecognized("UICTContentSizeCategoryHuge".to_string()),
    );
    let service = service(provider);

    assert!(service.is_non_default(Capability::PreferredContentSize));

    let snapshot = service.full_snapshot(false);
    let rendered = snapshot.get("preferredContentSize").unwrap();
    assert!(rendered.starts_with("99 "));
    assert!(rendered.contains("UICTContentSizeCategoryHuge"));
}

#[test]
fn snapshot_keys_are_pairwise_distinct() {
    let service = service(ScriptedProvider::all_defaults());

    let snapshot = service.full_snapshot(true);

    // BTreeMap keys are unique by construction; the entry count proves no
    // summary key collided with a capability key.
    assert_eq!(snapshot.len(), Capability::ALL.len() + 1 + Category::ALL.len());
}

#[test]
fn default_value_accessor_matches_registry() {
    let service = service(ScriptedProvider::all_defaults());

    for capability in Capability::ALL {
        assert_eq!(
            service.default_value(capability).render(),
            capability.default_value().render()
        );
        assert!(!service.is_non_default(capability));
    }
}
