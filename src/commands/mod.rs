//! Command implementations

mod check;
mod serve;
mod tracked;

use std::sync::Arc;

use log::info;

use cardwarden::adapters::console::LogNotifier;
use cardwarden::adapters::slack::SlackNotifier;
use cardwarden::adapters::trello::TrelloClient;
use cardwarden::config::{AppConfig, env_lookup};
use cardwarden::core::ports::Notifier;

pub use check::check;
pub use serve::serve;
pub use tracked::tracked;

/// Board API client from the configured credentials
fn trello_client(config: &AppConfig) -> anyhow::Result<TrelloClient> {
    let credentials = config.trello_credentials(env_lookup)?;
    let client = TrelloClient::new(credentials, config.trello.timeout())?;
    Ok(match &config.trello.base_url {
        Some(base_url) => client.with_base_url(base_url.as_str()),
        None => client,
    })
}

/// Slack when a webhook is configured, the log otherwise
fn notifier(config: &AppConfig) -> anyhow::Result<Arc<dyn Notifier>> {
    let notifier: Arc<dyn Notifier> = match config.slack_webhook(env_lookup) {
        Some(url) => Arc::new(SlackNotifier::new(url, config.slack.timeout())?),
        None => {
            info!("No Slack webhook configured; violations will only be logged");
            Arc::new(LogNotifier)
        },
    };
    Ok(notifier)
}
