//! Rule resolution - which rules apply to an event
//!
//! Every evaluation starts from the scope's base rules. A move into another
//! list appends that list's rules after them, in configured order and without
//! deduplication.

use crate::core::models::{ChangeEvent, EventKind, RuleRef, ScopeConfig, UpdateKind};

/// Compute the ordered rule set for an event
///
/// Archive and delete events never reach the resolver; they untrack the card
/// directly.
#[must_use]
pub fn resolve_rules(event: &ChangeEvent, scope: &ScopeConfig) -> Vec<RuleRef> {
    let mut rules = scope.base_rules.clone();

    if let EventKind::Update(UpdateKind::MoveToList { list_after, .. }) = &event.kind {
        rules.extend_from_slice(scope.rules_for_list(&list_after.name));
    }

    rules
}
