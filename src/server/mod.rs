//! Webhook server
//!
//! Receives board webhooks over HTTP and hands each change event to the
//! dispatcher as its own tokio task. Responses never wait for processing.
//!
//! Routing is split from the socket loop so it can be exercised without a
//! listener:
//!
//! - `HEAD`/`GET` on the webhook path answer 200 (Trello probes the callback
//!   URL before registering a webhook)
//! - `POST` parses the payload; malformed bodies get 400, oversized ones 413
//! - anything else gets 404 or 405

#[cfg(feature = "server")]
mod listener;

#[cfg(feature = "server")]
pub use listener::serve;

use std::io::Read;

use log::warn;
use thiserror::Error;

use crate::adapters::trello::WebhookPayload;
use crate::core::models::ChangeEvent;

/// HTTP methods the router distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `HEAD`
    Head,
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// Anything else
    Other,
}

/// Result of routing one request
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// Plain-text response body
    pub body: String,
    /// Event to dispatch after responding
    pub event: Option<ChangeEvent>,
}

impl Reply {
    fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            event: None,
        }
    }

    fn accepted(event: ChangeEvent) -> Self {
        Self {
            status: 200,
            body: "ok".to_string(),
            event: Some(event),
        }
    }
}

/// Largest webhook body accepted, in bytes
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Why a request body was not accepted
#[derive(Debug, Error)]
pub enum BodyError {
    /// Body exceeds the limit
    #[error("payload larger than {0} bytes")]
    TooLarge(u64),

    /// Body could not be read as UTF-8 text
    #[error("unreadable body: {0}")]
    Unreadable(#[from] std::io::Error),
}

impl BodyError {
    /// Reply sent in place of routing
    #[must_use]
    pub fn reply(&self) -> Reply {
        let status = match self {
            Self::TooLarge(_) => 413,
            Self::Unreadable(_) => 400,
        };
        Reply::status(status, self.to_string())
    }
}

/// Read a request body of at most `limit` bytes
pub fn read_body(reader: impl Read, limit: u64) -> Result<String, BodyError> {
    let mut body = String::new();
    let len = reader.take(limit + 1).read_to_string(&mut body)?;
    if len as u64 > limit {
        return Err(BodyError::TooLarge(limit));
    }
    Ok(body)
}

/// Route one request against the webhook path
#[must_use]
pub fn route(method: Method, url: &str, body: &str, webhook_path: &str) -> Reply {
    let path = url.split('?').next().unwrap_or(url);
    if path.trim_end_matches('/') != webhook_path.trim_end_matches('/') {
        return Reply::status(404, format!("not found: {path}"));
    }

    match method {
        Method::Head | Method::Get => Reply::status(200, "ok"),
        Method::Post => {
            let payload: WebhookPayload = match serde_json::from_str(body) {
                Ok(payload) => payload,
                Err(err) => {
                    warn!("Rejected webhook body: {err}");
                    return Reply::status(400, format!("invalid payload: {err}"));
                },
            };
            match payload.action.into_event() {
                Ok(event) => Reply::accepted(event),
                Err(err) => {
                    warn!("Rejected webhook action: {err}");
                    Reply::status(400, err.to_string())
                },
            }
        },
        Method::Other => Reply::status(405, "method not allowed"),
    }
}
