//! Business logic services
//!
//! Orchestration of the reconciliation flow. Services talk to the outside
//! world only through the traits in [`crate::core::ports`].
//!
//! - [`dispatcher`] - Route a change event to its branch
//! - [`resolver`] - Compose the rule set for an event
//! - [`pipeline`] - Fetch, evaluate, update the tracking record, notify
//! - [`message`] - Format violation messages

pub mod dispatcher;
pub mod message;
pub mod pipeline;
pub mod resolver;

pub use dispatcher::Dispatcher;
pub use message::violation_message;
pub use pipeline::{Origin, Outcome, Reconciler, Step};
pub use resolver::resolve_rules;
