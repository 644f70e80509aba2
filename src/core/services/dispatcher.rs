//! Event dispatch - routes a change event to its pipeline branch

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use super::pipeline::{Origin, Outcome, Reconciler, Step};
use super::resolver::resolve_rules;
use crate::core::models::{ChangeEvent, EventKind, UpdateKind};
use crate::core::ports::ScopeConfigProvider;

/// Stateless router from change events to reconciliation branches
///
/// Safe to share across tasks; each `dispatch` call is an independent unit
/// of work.
pub struct Dispatcher {
    scopes: Arc<dyn ScopeConfigProvider>,
    reconciler: Reconciler,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").field("reconciler", &self.reconciler).finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher over a scope provider and a reconciler
    #[must_use]
    pub fn new(scopes: Arc<dyn ScopeConfigProvider>, reconciler: Reconciler) -> Self {
        Self { scopes, reconciler }
    }

    /// Process one event to completion
    ///
    /// Never fails: gateway errors are logged inside the pipeline and show
    /// up here only as [`Outcome::Aborted`].
    pub async fn dispatch(&self, event: &ChangeEvent) -> Outcome {
        let outcome = match &event.kind {
            EventKind::Create => self.on_create(event).await,
            EventKind::Update(UpdateKind::Archive) | EventKind::Delete => {
                self.reconciler.untrack(event.card_id()).await
            },
            EventKind::Update(UpdateKind::MoveToList { .. } | UpdateKind::Other(_)) => {
                self.on_update(event).await
            },
            EventKind::Unsupported(_) => Outcome::Ignored,
        };

        debug!("{} event for card {} -> {outcome:?}", event.kind.label(), event.card_id());
        outcome
    }

    async fn on_create(&self, event: &ChangeEvent) -> Outcome {
        let scope = self.scopes.scope_config(&event.scope_id).filter(|s| s.evaluate_on_create);
        if let Some(scope) = scope {
            let rules = resolve_rules(event, &scope);
            if !rules.is_empty() {
                return self.reconciler.reconcile(event, &scope, &rules, Origin::Create).await;
            }
        }

        self.reconciler.track_created(event).await
    }

    async fn on_update(&self, event: &ChangeEvent) -> Outcome {
        let Some(scope) = self.scopes.scope_config(&event.scope_id) else {
            warn!(
                "No configuration for board {}; dropping event for card {}",
                event.scope_id,
                event.card_id()
            );
            return Outcome::Aborted(Step::Config);
        };

        let rules = resolve_rules(event, &scope);
        self.reconciler.reconcile(event, &scope, &rules, Origin::Update).await
    }
}
