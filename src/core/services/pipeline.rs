//! Reconciliation pipeline - drives tracking records from evaluation results
//!
//! Each step is one gateway call. A failing step is logged with the card id
//! and ends processing of that event; nothing is retried and no error leaves
//! the pipeline.
//!
//! ```text
//! fetch -> evaluate -> valid   -> delete record
//!                   -> invalid -> (find) -> create record? -> notify
//! ```

use std::fmt;
use std::sync::Arc;

use log::{debug, error, info, warn};

use super::message::{STORE_TROUBLE_MESSAGE, violation_message};
use crate::core::models::{Card, ChangeEvent, RuleRef, ScopeConfig, TrackingRecord};
use crate::core::ports::{
    CardFetcher, CardStore, EvaluationOptions, FetchOptions, Notifier, RuleEngine,
};

/// Which branch routed a card into evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Card creation; an invalid verdict always writes the record
    Create,
    /// Card update; the record is written only when missing
    Update,
}

/// The gateway step that stopped processing of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No configuration for the event's scope
    Config,
    /// Fetching the card failed
    Fetch,
    /// Looking up the tracking record failed
    Lookup,
    /// Writing the tracking record failed
    Create,
    /// Deleting the tracking record failed
    Delete,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::Fetch => write!(f, "fetch"),
            Self::Lookup => write!(f, "lookup"),
            Self::Create => write!(f, "create"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// What processing an event amounted to
///
/// Returned for logging and tests only; it never carries an error back to
/// the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Event type not handled
    Ignored,
    /// New card tracked without evaluation
    Tracked,
    /// Resolved rule set was empty; nothing fetched or evaluated
    NoRules,
    /// Card evaluated valid; its record (if any) was deleted
    Cleared,
    /// Card archived or deleted; its record (if any) was deleted
    Untracked,
    /// Card evaluated invalid
    Violation {
        /// Whether this evaluation wrote the tracking record
        record_created: bool,
        /// Whether the notifier accepted the message
        notified: bool,
    },
    /// A gateway failed; the event was dropped
    Aborted(Step),
}

/// Runs the fetch/evaluate/store/notify sequence for one card at a time
pub struct Reconciler {
    store: Arc<dyn CardStore>,
    fetcher: Arc<dyn CardFetcher>,
    engine: Arc<dyn RuleEngine>,
    notifier: Arc<dyn Notifier>,
}

impl fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reconciler").finish_non_exhaustive()
    }
}

impl Reconciler {
    /// Wire a reconciler to its gateways
    #[must_use]
    pub fn new(
        store: Arc<dyn CardStore>,
        fetcher: Arc<dyn CardFetcher>,
        engine: Arc<dyn RuleEngine>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            fetcher,
            engine,
            notifier,
        }
    }

    /// Track a freshly created card without evaluating it
    ///
    /// A new card carries little more than a title, so the full rule set
    /// would reject nearly every one.
    pub async fn track_created(&self, event: &ChangeEvent) -> Outcome {
        let mut record = TrackingRecord::new(event.card_id());
        record.card_name.clone_from(&event.card.name);

        match self.store.create(&record).await {
            Ok(()) => {
                info!("Tracking new card {}", event.card_id());
                Outcome::Tracked
            },
            Err(err) => {
                error!("Failed to track new card {}: {err:#}", event.card_id());
                Outcome::Aborted(Step::Create)
            },
        }
    }

    /// Forget a card that was archived or deleted upstream
    pub async fn untrack(&self, card_id: &str) -> Outcome {
        match self.store.delete(card_id).await {
            Ok(()) => {
                info!("Stopped tracking card {card_id}");
                Outcome::Untracked
            },
            Err(err) => {
                error!("Failed to untrack card {card_id}: {err:#}");
                Outcome::Aborted(Step::Delete)
            },
        }
    }

    /// Evaluate a card against `rules` and update its tracking record
    pub async fn reconcile(
        &self,
        event: &ChangeEvent,
        scope: &ScopeConfig,
        rules: &[RuleRef],
        origin: Origin,
    ) -> Outcome {
        if rules.is_empty() {
            debug!("No rules apply to card {}", event.card_id());
            return Outcome::NoRules;
        }

        let card = match self.fetcher.fetch_card(event.card_id(), FetchOptions::full()).await {
            Ok(card) => card,
            Err(err) => {
                error!("Failed to fetch card {}: {err:#}", event.card_id());
                return Outcome::Aborted(Step::Fetch);
            },
        };

        let result = self.engine.evaluate(&card, rules, &EvaluationOptions::for_event(event));
        debug!(
            "Card {} evaluated against {} rule(s): valid={}",
            card.id,
            rules.len(),
            result.valid
        );

        if result.valid {
            return match self.store.delete(&card.id).await {
                Ok(()) => Outcome::Cleared,
                Err(err) => {
                    error!("Failed to clear record for valid card {}: {err:#}", card.id);
                    Outcome::Aborted(Step::Delete)
                },
            };
        }

        self.handle_invalid(event, scope, &card, &result.errors, origin).await
    }

    /// Record an invalid card and tell the member who changed it
    ///
    /// Every invalid verdict notifies; only the first one of an invalid
    /// streak writes the record.
    pub async fn handle_invalid(
        &self,
        event: &ChangeEvent,
        scope: &ScopeConfig,
        card: &Card,
        errors: &[String],
        origin: Origin,
    ) -> Outcome {
        let record_created = match origin {
            Origin::Create => {
                if let Err(err) = self.store.create(&TrackingRecord::for_card(card)).await {
                    error!("Failed to record invalid new card {}: {err:#}", card.id);
                    return Outcome::Aborted(Step::Create);
                }
                true
            },
            Origin::Update => match self.store.find(&card.id).await {
                Err(err) => {
                    error!("Failed to look up record for card {}: {err:#}", card.id);
                    return Outcome::Aborted(Step::Lookup);
                },
                Ok(Some(_)) => false,
                Ok(None) => {
                    if let Err(err) = self.store.create(&TrackingRecord::for_card(card)).await {
                        error!("Failed to record invalid card {}: {err:#}", card.id);
                        self.alert_store_failure(scope).await;
                        return Outcome::Aborted(Step::Create);
                    }
                    true
                },
            },
        };

        let notified = self.notify(event, scope, card, errors).await;
        Outcome::Violation {
            record_created,
            notified,
        }
    }

    /// Send the violation message; failures are logged and reported as `false`
    pub async fn notify(
        &self,
        event: &ChangeEvent,
        scope: &ScopeConfig,
        card: &Card,
        errors: &[String],
    ) -> bool {
        let message = violation_message(&event.actor, card, errors);
        let target = scope.notification_target();

        match self.notifier.publish(&message, target).await {
            Ok(()) => {
                info!("Notified {} about card {} in {target}", event.actor.username, card.id);
                true
            },
            Err(err) => {
                error!("Failed to notify about card {}: {err:#}", card.id);
                false
            },
        }
    }

    async fn alert_store_failure(&self, scope: &ScopeConfig) {
        if let Err(err) = self.notifier.publish(STORE_TROUBLE_MESSAGE, scope.notification_target()).await
        {
            warn!("Failed to send store failure alert: {err:#}");
        }
    }
}
