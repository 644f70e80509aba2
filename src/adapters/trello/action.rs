//! Trello webhook action parsing
//!
//! Trello posts `{ "action": { ... }, "model": { ... } }` for every change on
//! a watched board. Only the action matters here; it is mapped onto the
//! closed [`EventKind`] variants.

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{Actor, CardRef, ChangeEvent, EventKind, ListRef, UpdateKind};

/// Translation key of a list-to-list move
pub const MOVE_CARD_KEY: &str = "action_move_card_from_list_to_list";

/// Translation key of an archive
pub const ARCHIVE_CARD_KEY: &str = "action_archived_card";

/// Errors turning a webhook action into a change event
#[derive(Debug, Error)]
pub enum ActionError {
    /// The action's `data` object has an unexpected shape
    #[error("invalid action data: {0}")]
    Data(#[from] serde_json::Error),

    /// A card action without a card
    #[error("{0} action has no card")]
    MissingCard(String),

    /// A card action without a board
    #[error("{0} action has no board")]
    MissingBoard(String),

    /// A move without a destination list
    #[error("card move has no destination list")]
    MissingListAfter,
}

/// Body of a webhook request
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    /// The action that fired the webhook
    pub action: TrelloAction,
}

/// A Trello action as delivered by webhooks
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloAction {
    /// Action type, e.g. `updateCard`
    #[serde(rename = "type")]
    pub action_type: String,

    /// Raw action data
    #[serde(default)]
    pub data: serde_json::Value,

    /// Display metadata carrying the translation key
    #[serde(default)]
    pub display: Option<Display>,

    /// Member who performed the action
    #[serde(default)]
    pub member_creator: Option<MemberCreator>,
}

/// Display metadata of an action
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    /// Sub-classification of the action
    #[serde(default)]
    pub translation_key: Option<String>,
}

/// Member who performed an action
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberCreator {
    /// Member username
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionData {
    #[serde(default)]
    card: Option<CardRef>,
    #[serde(default)]
    board: Option<BoardRef>,
    #[serde(default)]
    list_before: Option<ListRef>,
    #[serde(default)]
    list_after: Option<ListRef>,
}

#[derive(Debug, Deserialize)]
struct BoardRef {
    id: String,
}

impl TrelloAction {
    /// Translation key, if Trello sent one
    #[must_use]
    pub fn translation_key(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.translation_key.as_deref())
    }

    /// Convert into a change event
    ///
    /// Action types other than card create/update/delete become
    /// [`EventKind::Unsupported`] and never fail on missing card data.
    pub fn into_event(self) -> Result<ChangeEvent, ActionError> {
        let data: ActionData = if self.data.is_null() {
            ActionData::default()
        } else {
            serde_json::from_value(self.data.clone())?
        };
        let actor = Actor::new(self.member_creator.map(|m| m.username).unwrap_or_default());

        let kind = match self.action_type.as_str() {
            "createCard" => EventKind::Create,
            "deleteCard" => EventKind::Delete,
            "updateCard" => EventKind::Update(update_kind(
                self.display.and_then(|d| d.translation_key),
                data.list_before.clone(),
                data.list_after.clone(),
            )?),
            other => {
                let card = data.card.unwrap_or_else(|| CardRef::new(""));
                let scope = data.board.map(|b| b.id).unwrap_or_default();
                return Ok(ChangeEvent::new(EventKind::Unsupported(other.to_string()), card, scope, actor)
                    .with_data(self.data));
            },
        };

        let card = data.card.ok_or_else(|| ActionError::MissingCard(self.action_type.clone()))?;
        let board = data.board.ok_or_else(|| ActionError::MissingBoard(self.action_type.clone()))?;

        Ok(ChangeEvent::new(kind, card, board.id, actor).with_data(self.data))
    }
}

fn update_kind(
    translation_key: Option<String>,
    list_before: Option<ListRef>,
    list_after: Option<ListRef>,
) -> Result<UpdateKind, ActionError> {
    match translation_key.as_deref() {
        Some(MOVE_CARD_KEY) => Ok(UpdateKind::MoveToList {
            list_before,
            list_after: list_after.ok_or(ActionError::MissingListAfter)?,
        }),
        Some(ARCHIVE_CARD_KEY) => Ok(UpdateKind::Archive),
        _ => Ok(UpdateKind::Other(translation_key)),
    }
}
