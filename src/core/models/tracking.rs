//! Tracking record model
//!
//! A tracking record marks a card as currently known to violate its board's
//! rules. Its existence is the only state the reconciler keeps.

use serde::{Deserialize, Serialize};

use super::Card;

/// Persisted marker for a card in violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingRecord {
    /// Card identifier (unique key)
    pub card_id: String,

    /// Card title when the record was written, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,

    /// When the record was created (RFC3339)
    pub created_at: String,
}

impl TrackingRecord {
    /// Create a record for a card id
    #[must_use]
    pub fn new(card_id: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            card_name: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a record from a hydrated card
    #[must_use]
    pub fn for_card(card: &Card) -> Self {
        Self {
            card_name: Some(card.name.clone()).filter(|name| !name.is_empty()),
            ..Self::new(card.id.clone())
        }
    }
}
