//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the reconciliation logic
//! and external systems (board API, record storage, chat delivery, rules).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Fake implementations for unit tests
//! - **Flexibility**: Swap implementations without changing business logic
//! - **Clarity**: Clear boundaries between layers

mod card_fetcher;
mod card_store;
mod notifier;
mod rule_engine;
mod scope_provider;

pub use card_fetcher::{CardFetcher, ChecklistFilter, FetchOptions};
pub use card_store::{CardStore, StorageBackend};
pub use notifier::Notifier;
pub use rule_engine::{EvaluationOptions, RuleEngine};
pub use scope_provider::ScopeConfigProvider;
