//! Notification message formatting

use crate::core::models::{Actor, Card};

/// Opening line of every violation message
pub const VIOLATION_PREAMBLE: &str = "☹️ Awwww! Looks like you didn't follow the ticket standards";

/// Sent when the tracking store fails while a violation is being recorded
pub const STORE_TROUBLE_MESSAGE: &str = "Your db is having problem";

/// Build the message sent to the member whose change left a card invalid
///
/// Errors are listed one per line in the order the rules reported them.
#[must_use]
pub fn violation_message(actor: &Actor, card: &Card, errors: &[String]) -> String {
    let mut message = format!("@{}\n {VIOLATION_PREAMBLE} \n {}", actor.username, card_reference(card));
    for error in errors {
        message.push_str("\n• ");
        message.push_str(error);
    }
    message
}

/// Chat-style link to a card, falling back to whatever identifies it
fn card_reference(card: &Card) -> String {
    let label = if card.name.is_empty() { card.id.as_str() } else { card.name.as_str() };
    if card.url.is_empty() { label.to_string() } else { format!("<{}|{label}>", card.url) }
}
