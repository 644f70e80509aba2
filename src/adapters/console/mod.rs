//! Log-only notifier
//!
//! Used when no chat webhook is configured: violation messages are written
//! to the log instead of being delivered.

use async_trait::async_trait;
use log::info;

use crate::core::models::NotificationTarget;
use crate::core::ports::Notifier;

/// Notifier that logs every message at `info`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn publish(&self, message: &str, target: &NotificationTarget) -> anyhow::Result<()> {
        info!("[{target}] {message}");
        Ok(())
    }
}
