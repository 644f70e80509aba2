//! Notifier port
//!
//! Defines the interface for delivering violation messages.

use async_trait::async_trait;

use super::super::models::NotificationTarget;

/// Delivers a formatted message to a channel
///
/// Callers log failures and carry on; a notifier error never stops event
/// processing.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish a message to a target
    async fn publish(&self, message: &str, target: &NotificationTarget) -> anyhow::Result<()>;
}
