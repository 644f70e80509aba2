//! Tests for event dispatch and the reconciliation lifecycle
//!
//! Each test drives the dispatcher with fakes and checks the resulting
//! store mutations, evaluations, and notifications.

use cardwarden::core::models::{EvaluationResult, RuleRef, ScopeConfig};
use cardwarden::core::services::{Outcome, Step};

use crate::common::fakes::{CountingStore, FakeFetcher, RecordingNotifier, ScriptedEngine};
use crate::common::fixtures::{
    Harness, TARGET, archive_event, card, create_event, delete_event, invalid, move_event, scope,
    unsupported_event, update_event, violation,
};

// =============================================================================
// CREATE
// =============================================================================

#[tokio::test]
async fn test_create_tracks_without_evaluation() {
    let h = Harness::new(invalid(&["title too short"]));

    assert_eq!(h.dispatch(&create_event("C1")).await, Outcome::Tracked);

    assert!(h.store.contains("C1").await);
    assert_eq!(h.engine.calls(), 0);
    assert_eq!(h.fetcher.calls(), 0);
    assert_eq!(h.notifier.count(), 0);
}

#[tokio::test]
async fn test_create_tracks_card_on_unconfigured_board() {
    let h = Harness::build(
        ScopeConfig::default(),
        CountingStore::default(),
        FakeFetcher::default(),
        ScriptedEngine::always(EvaluationResult::valid()),
        RecordingNotifier::default(),
    );
    let mut event = create_event("C9");
    event.scope_id = "unknown-board".to_string();

    assert_eq!(h.dispatch(&event).await, Outcome::Tracked);
    assert!(h.store.contains("C9").await);
}

#[tokio::test]
async fn test_create_with_evaluation_enabled_records_and_notifies() {
    let mut scope = scope();
    scope.evaluate_on_create = true;
    let h = Harness::build(
        scope,
        CountingStore::default(),
        FakeFetcher::with_cards(vec![card("C1")]),
        ScriptedEngine::always(invalid(&["needs a description"])),
        RecordingNotifier::default(),
    );

    assert_eq!(h.dispatch(&create_event("C1")).await, violation(true));
    assert_eq!(h.engine.calls(), 1);
    assert_eq!(h.notifier.count(), 1);
    assert!(h.store.contains("C1").await);
}

// =============================================================================
// UPDATE
// =============================================================================

#[tokio::test]
async fn test_update_with_no_rules_has_no_side_effects() {
    let h = Harness::build(
        ScopeConfig::new(Vec::new(), TARGET),
        CountingStore::default(),
        FakeFetcher::with_cards(vec![card("C1")]),
        ScriptedEngine::always(invalid(&["unused"])),
        RecordingNotifier::default(),
    );

    assert_eq!(h.dispatch(&update_event("C1")).await, Outcome::NoRules);
    assert_eq!(h.dispatch(&move_event("C1", "Done")).await, Outcome::NoRules);

    assert_eq!(h.fetcher.calls(), 0);
    assert_eq!(h.engine.calls(), 0);
    assert_eq!(h.store.creates(), 0);
    assert_eq!(h.store.deletes(), 0);
    assert_eq!(h.notifier.count(), 0);
}

#[tokio::test]
async fn test_update_valid_deletes_existing_record() {
    let h = Harness::new(EvaluationResult::valid());
    h.store.seed("C1").await;

    assert_eq!(h.dispatch(&update_event("C1")).await, Outcome::Cleared);

    assert!(!h.store.contains("C1").await);
    assert_eq!(h.notifier.count(), 0);
}

#[tokio::test]
async fn test_update_valid_twice_is_idempotent() {
    let h = Harness::new(EvaluationResult::valid());
    h.store.seed("C1").await;

    assert_eq!(h.dispatch(&update_event("C1")).await, Outcome::Cleared);
    assert_eq!(h.dispatch(&update_event("C1")).await, Outcome::Cleared);

    assert!(!h.store.contains("C1").await);
    assert_eq!(h.notifier.count(), 0);
}

#[tokio::test]
async fn test_update_invalid_without_record_creates_and_notifies() {
    let h = Harness::new(invalid(&["title too short"]));

    assert_eq!(h.dispatch(&update_event("C1")).await, violation(true));

    assert!(h.store.contains("C1").await);
    assert_eq!(h.store.creates(), 1);
    let messages = h.notifier.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, TARGET);
    assert!(messages[0].1.starts_with("@alice"));
    assert!(messages[0].1.contains("title too short"));
}

#[tokio::test]
async fn test_update_invalid_with_record_notifies_without_recreating() {
    let h = Harness::new(invalid(&["title too short"]));

    assert_eq!(h.dispatch(&update_event("C1")).await, violation(true));
    assert_eq!(h.dispatch(&update_event("C1")).await, violation(false));

    assert_eq!(h.store.creates(), 1);
    assert_eq!(h.notifier.count(), 2);
}

#[tokio::test]
async fn test_update_on_unconfigured_board_is_dropped() {
    let h = Harness::new(invalid(&["title too short"]));
    let mut event = update_event("C1");
    event.scope_id = "B2".to_string();

    assert_eq!(h.dispatch(&event).await, Outcome::Aborted(Step::Config));
    assert_eq!(h.fetcher.calls(), 0);
}

// =============================================================================
// RULE COMPOSITION
// =============================================================================

#[tokio::test]
async fn test_move_to_configured_list_appends_list_rules() {
    let h = Harness::new(EvaluationResult::valid());

    h.dispatch(&move_event("C1", "Done")).await;
    h.dispatch(&move_event("C1", "done ")).await;
    h.dispatch(&update_event("C1")).await;

    assert_eq!(
        h.engine.seen(),
        vec![
            vec!["title_min_length", "checklists_complete", "has_attachment"],
            vec!["title_min_length"],
            vec!["title_min_length"],
        ]
    );
}

#[tokio::test]
async fn test_move_with_only_list_rules_still_evaluates() {
    let scope = ScopeConfig::new(Vec::new(), TARGET)
        .with_list_rules("Done", vec![RuleRef::new("has_attachment")]);
    let h = Harness::build(
        scope,
        CountingStore::default(),
        FakeFetcher::with_cards(vec![card("C1")]),
        ScriptedEngine::always(EvaluationResult::valid()),
        RecordingNotifier::default(),
    );

    assert_eq!(h.dispatch(&update_event("C1")).await, Outcome::NoRules);
    assert_eq!(h.dispatch(&move_event("C1", "DONE")).await, Outcome::Cleared);
    assert_eq!(h.engine.seen(), vec![vec!["has_attachment"]]);
}

// =============================================================================
// ARCHIVE / DELETE / UNSUPPORTED
// =============================================================================

#[tokio::test]
async fn test_archive_untracks_without_evaluation() {
    let h = Harness::new(invalid(&["title too short"]));
    h.store.seed("C1").await;

    assert_eq!(h.dispatch(&archive_event("C1")).await, Outcome::Untracked);

    assert!(!h.store.contains("C1").await);
    assert_eq!(h.fetcher.calls(), 0);
    assert_eq!(h.engine.calls(), 0);
    assert_eq!(h.notifier.count(), 0);
}

#[tokio::test]
async fn test_delete_untracks_missing_record_without_error() {
    let h = Harness::new(EvaluationResult::valid());

    assert_eq!(h.dispatch(&delete_event("C1")).await, Outcome::Untracked);
    assert_eq!(h.dispatch(&delete_event("C1")).await, Outcome::Untracked);
}

#[tokio::test]
async fn test_unsupported_event_is_ignored() {
    let h = Harness::new(invalid(&["title too short"]));

    assert_eq!(h.dispatch(&unsupported_event("C1")).await, Outcome::Ignored);

    assert_eq!(h.fetcher.calls(), 0);
    assert_eq!(h.store.creates(), 0);
    assert_eq!(h.store.deletes(), 0);
    assert_eq!(h.notifier.count(), 0);
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[tokio::test]
async fn test_card_lifecycle() {
    let engine = ScriptedEngine::sequence(
        vec![invalid(&["title too short"]), invalid(&["title too short"])],
        EvaluationResult::valid(),
    );
    let h = Harness::build(
        scope(),
        CountingStore::default(),
        FakeFetcher::with_cards(vec![card("C1")]),
        engine,
        RecordingNotifier::default(),
    );

    // Created: tracked, nobody told
    assert_eq!(h.dispatch(&create_event("C1")).await, Outcome::Tracked);
    assert_eq!(h.notifier.count(), 0);

    // Still invalid: the record from creation is reused, member is told
    assert_eq!(h.dispatch(&update_event("C1")).await, violation(false));
    assert_eq!(h.dispatch(&update_event("C1")).await, violation(false));
    assert_eq!(h.notifier.count(), 2);
    assert_eq!(h.store.creates(), 1);

    // Fixed
    assert_eq!(h.dispatch(&update_event("C1")).await, Outcome::Cleared);
    assert!(!h.store.contains("C1").await);
    assert_eq!(h.notifier.count(), 2);

    // Archived
    assert_eq!(h.dispatch(&archive_event("C1")).await, Outcome::Untracked);
}
