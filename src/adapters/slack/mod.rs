//! Slack notifier
//!
//! Implements `Notifier` by posting to a Slack incoming webhook. The
//! notification target is sent as the message channel. The webhook URL is a
//! credential, so errors are stripped of it.

use std::time::Duration;

use anyhow::Context as _;
use async_trait::async_trait;
use serde::Serialize;

use crate::core::models::NotificationTarget;
use crate::core::ports::Notifier;

/// Posts messages to a Slack incoming webhook
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    http: reqwest::Client,
    webhook_url: String,
}

#[derive(Debug, Serialize)]
struct SlackMessage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a str>,
    text: &'a str,
}

impl SlackNotifier {
    /// Create a notifier for a webhook URL; each post gives up after `timeout`
    pub fn new(webhook_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("cannot build slack client")?;
        Ok(Self {
            http,
            webhook_url: webhook_url.into(),
        })
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn publish(&self, message: &str, target: &NotificationTarget) -> anyhow::Result<()> {
        let body = SlackMessage {
            channel: Some(target.as_str()).filter(|c| !c.is_empty()),
            text: message,
        };
        self.http
            .post(&self.webhook_url)
            .json(&body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("slack webhook request failed")?
            .error_for_status()
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("slack rejected message for {target}"))?;
        Ok(())
    }
}
