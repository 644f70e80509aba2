//! Card model
//!
//! The fully hydrated card as returned by the board API, including the
//! attachments and checklists that rules inspect.

use serde::{Deserialize, Serialize};

/// A card on a collaboration board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card identifier
    pub id: String,
    /// Card title
    #[serde(default)]
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub desc: String,
    /// Link to the card
    #[serde(default)]
    pub url: String,
    /// List the card currently sits in
    #[serde(default)]
    pub id_list: Option<String>,
    /// Labels applied to the card
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Assigned member ids
    #[serde(default)]
    pub id_members: Vec<String>,
    /// Due date, if any
    #[serde(default)]
    pub due: Option<String>,
    /// Attachments (only present when fetched with attachments)
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Checklists (only present when fetched with checklists)
    #[serde(default)]
    pub checklists: Vec<Checklist>,
}

impl Card {
    /// Create a bare card with an id and title
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A card label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name (may be empty for color-only labels)
    #[serde(default)]
    pub name: String,
    /// Label color
    #[serde(default)]
    pub color: Option<String>,
}

/// A file or link attached to a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment name
    #[serde(default)]
    pub name: String,
    /// Attachment URL
    #[serde(default)]
    pub url: String,
}

/// A checklist on a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    /// Checklist name
    #[serde(default)]
    pub name: String,
    /// Items in board order
    #[serde(default)]
    pub check_items: Vec<CheckItem>,
}

impl Checklist {
    /// Whether every item is complete (an empty checklist counts as complete)
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.check_items.iter().all(|item| item.state == CheckItemState::Complete)
    }
}

/// One checklist item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckItem {
    /// Item text
    #[serde(default)]
    pub name: String,
    /// Completion state
    #[serde(default)]
    pub state: CheckItemState,
}

/// Completion state of a checklist item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckItemState {
    /// Not ticked yet
    #[default]
    Incomplete,
    /// Ticked
    Complete,
}
