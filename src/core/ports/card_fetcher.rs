//! Card fetch port
//!
//! Defines the interface for retrieving hydrated cards from the board API.

use async_trait::async_trait;

use super::super::models::Card;

/// Retrieves a fresh copy of a card on demand
#[async_trait]
pub trait CardFetcher: Send + Sync {
    /// Fetch a card by id with the requested nested data
    async fn fetch_card(&self, id: &str, options: FetchOptions) -> anyhow::Result<Card>;
}

/// Which nested data to include when fetching a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchOptions {
    /// Include attachments
    pub attachments: bool,
    /// Which checklists to include
    pub checklists: ChecklistFilter,
}

impl FetchOptions {
    /// Everything rules may need: attachments and all checklists
    #[must_use]
    pub const fn full() -> Self {
        Self {
            attachments: true,
            checklists: ChecklistFilter::All,
        }
    }
}

/// Checklist inclusion filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecklistFilter {
    /// Every checklist on the card
    All,
    /// No checklists
    #[default]
    None,
}

impl ChecklistFilter {
    /// Query-string value understood by the board API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::None => "none",
        }
    }
}
