//! Trello adapters
//!
//! - `action` - webhook payload parsing into [`ChangeEvent`](crate::core::models::ChangeEvent)
//! - `client` - REST client implementing `CardFetcher`

mod action;
mod client;

pub use action::{ActionError, TrelloAction, WebhookPayload};
pub use client::{DEFAULT_BASE_URL, TrelloClient, TrelloCredentials};
