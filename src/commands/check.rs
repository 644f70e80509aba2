//! Evaluate a single card on demand

use anyhow::anyhow;

use cardwarden::adapters::rules::BuiltinRuleEngine;
use cardwarden::config::AppConfig;
use cardwarden::core::models::{Actor, CardRef, ChangeEvent, EventKind, ListRef, UpdateKind};
use cardwarden::core::ports::{CardFetcher, EvaluationOptions, FetchOptions, RuleEngine};
use cardwarden::core::services::resolve_rules;
use cardwarden::output::{CheckReport, OutputMode};

/// Fetch a card and report how it fares against its board's rules
///
/// Read-only: the tracking store is never touched and nobody is notified.
pub fn check(
    config: &AppConfig,
    card_id: &str,
    board: &str,
    list: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let scope = config.scopes.get(board).ok_or_else(|| anyhow!("board {board} is not configured"))?;

    let update = match list {
        Some(name) => UpdateKind::MoveToList {
            list_before: None,
            list_after: ListRef::named(name),
        },
        None => UpdateKind::Other(None),
    };
    let event = ChangeEvent::new(EventKind::Update(update), CardRef::new(card_id), board, Actor::new("cli"));
    let rules = resolve_rules(&event, scope);

    let client = super::trello_client(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let card = runtime.block_on(client.fetch_card(card_id, FetchOptions::full()))?;

    let result = BuiltinRuleEngine::new().evaluate(&card, &rules, &EvaluationOptions::for_event(&event));

    CheckReport {
        card_id: card.id,
        card_name: card.name,
        rules_checked: rules.len(),
        valid: result.valid,
        errors: result.errors,
    }
    .render(mode);
    Ok(())
}
