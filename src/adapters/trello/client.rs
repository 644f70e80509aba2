//! Trello REST client
//!
//! Implements `CardFetcher` against `GET /1/cards/{id}`.
//!
//! Credentials travel in the query string, so every error is stripped of its
//! URL before it leaves this module.

use std::fmt;
use std::time::Duration;

use anyhow::Context as _;
use async_trait::async_trait;
use reqwest::Url;

use crate::core::models::Card;
use crate::core::ports::{CardFetcher, FetchOptions};

/// Public Trello API root
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com";

/// API key and token used to authenticate requests
#[derive(Clone, Default)]
pub struct TrelloCredentials {
    /// Application key
    pub api_key: String,
    /// Member token
    pub token: String,
}

impl fmt::Debug for TrelloCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloCredentials")
            .field("api_key", &self.api_key)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// HTTP client for the Trello REST API
#[derive(Debug, Clone)]
pub struct TrelloClient {
    http: reqwest::Client,
    base_url: String,
    credentials: TrelloCredentials,
}

impl TrelloClient {
    /// Create a client for the public API; each request gives up after `timeout`
    pub fn new(credentials: TrelloCredentials, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("cannot build board API client")?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
        })
    }

    /// Point the client at another API root
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn card_url(&self, id: &str, options: FetchOptions) -> anyhow::Result<Url> {
        let attachments = if options.attachments { "true" } else { "false" };
        Url::parse_with_params(
            &format!("{}/1/cards/{id}", self.base_url),
            [
                ("attachments", attachments),
                ("checklists", options.checklists.as_str()),
                ("key", self.credentials.api_key.as_str()),
                ("token", self.credentials.token.as_str()),
            ],
        )
        .with_context(|| format!("invalid card URL for {id}"))
    }
}

#[async_trait]
impl CardFetcher for TrelloClient {
    async fn fetch_card(&self, id: &str, options: FetchOptions) -> anyhow::Result<Card> {
        let url = self.card_url(id, options)?;
        let card = self
            .http
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("request for card {id} failed"))?
            .error_for_status()
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("board API rejected card {id}"))?
            .json::<Card>()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("card {id} response is not a card"))?;
        Ok(card)
    }
}
