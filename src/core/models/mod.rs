//! Domain models for cardwarden
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ChangeEvent`] - "This card was created, updated, or deleted"
//! - [`Card`] - The hydrated card rules are evaluated against
//! - [`RuleRef`] - An opaque, configured rule
//! - [`EvaluationResult`] - Verdict of a rule run
//! - [`TrackingRecord`] - "This card is known to be in violation"
//! - [`ScopeConfig`] - Per-board rules and defaults

mod card;
mod evaluation;
mod event;
mod rule;
mod scope;
mod tracking;

pub use card::{Attachment, Card, CheckItem, CheckItemState, Checklist, Label};
pub use evaluation::EvaluationResult;
pub use event::{Actor, CardRef, ChangeEvent, EventKind, ListRef, UpdateKind};
pub use rule::RuleRef;
pub use scope::{NotificationTarget, ScopeConfig, ScopeDefaults};
pub use tracking::TrackingRecord;
