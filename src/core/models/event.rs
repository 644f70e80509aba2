//! Change event model
//!
//! A change event is one upstream notification that a card was created,
//! updated, or deleted. The upstream tags are parsed into closed enums at the
//! adapter boundary so the core never matches on raw strings.

use serde::{Deserialize, Serialize};

/// One inbound card change, immutable for the duration of its processing
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// What happened to the card
    pub kind: EventKind,
    /// The card the event is about
    pub card: CardRef,
    /// Board (scope) the card lives on
    pub scope_id: String,
    /// Member who triggered the change
    pub actor: Actor,
    /// Raw upstream event data, handed to rules as transition context
    pub data: serde_json::Value,
}

impl ChangeEvent {
    /// Create an event with empty raw data
    #[must_use]
    pub fn new(kind: EventKind, card: CardRef, scope_id: impl Into<String>, actor: Actor) -> Self {
        Self {
            kind,
            card,
            scope_id: scope_id.into(),
            actor,
            data: serde_json::Value::Null,
        }
    }

    /// Attach raw upstream data
    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    /// Identifier of the card this event concerns
    #[must_use]
    pub fn card_id(&self) -> &str {
        &self.card.id
    }
}

/// Top-level classification of a change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A card was created
    Create,
    /// A card was changed; the payload says how
    Update(UpdateKind),
    /// A card was deleted upstream
    Delete,
    /// An upstream event type this system does not handle
    Unsupported(String),
}

impl EventKind {
    /// Short label used in log lines
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Create => "create",
            Self::Update(UpdateKind::MoveToList { .. }) => "update:move",
            Self::Update(UpdateKind::Archive) => "update:archive",
            Self::Update(UpdateKind::Other(_)) => "update",
            Self::Delete => "delete",
            Self::Unsupported(tag) => tag,
        }
    }
}

/// Sub-classification of an update event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateKind {
    /// Card moved between lists
    MoveToList {
        /// List the card left, when the upstream reports it
        list_before: Option<ListRef>,
        /// List the card landed in
        list_after: ListRef,
    },
    /// Card was archived
    Archive,
    /// Any other edit; carries the upstream translation key when present
    Other(Option<String>),
}

/// Minimal card reference carried by an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRef {
    /// Card identifier
    pub id: String,
    /// Card title at the time of the event
    #[serde(default)]
    pub name: Option<String>,
}

impl CardRef {
    /// Reference a card by id only
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

/// A list (column) on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRef {
    /// Display name of the list
    pub name: String,
    /// List identifier
    #[serde(default)]
    pub id: Option<String>,
}

impl ListRef {
    /// Reference a list by display name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }
}

/// Member who originated an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Username used to address notifications
    pub username: String,
}

impl Actor {
    /// Create an actor from a username
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
