//! Built-in rule engine
//!
//! Implements `RuleEngine` with a small catalog of card checks. Rules are
//! looked up by name; each may carry a `message` parameter that replaces its
//! default error text.
//!
//! | rule                  | params                  | fails when                              |
//! |-----------------------|-------------------------|-----------------------------------------|
//! | `title_min_length`    | `min` (default 10)      | trimmed title is shorter than `min`     |
//! | `title_pattern`       | `pattern` (regex)       | title does not match                    |
//! | `has_description`     |                         | description is blank                    |
//! | `has_members`         |                         | nobody is assigned                      |
//! | `has_labels`          |                         | no labels                               |
//! | `has_due_date`        |                         | no due date                             |
//! | `has_attachment`      |                         | no attachments                          |
//! | `has_checklist`       | `name` (optional)       | no checklist (with that name)           |
//! | `checklists_complete` |                         | any checklist has an unchecked item     |
//! | `moved_from`          | `lists` (array)         | a move came from a list not in `lists`  |

use log::warn;
use regex::Regex;

use crate::core::models::{Card, EvaluationResult, EventKind, RuleRef, UpdateKind};
use crate::core::ports::{EvaluationOptions, RuleEngine};

/// Minimum title length when `title_min_length` has no `min`
pub const DEFAULT_TITLE_MIN: u64 = 10;

/// Rule engine backed by the built-in catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRuleEngine;

impl BuiltinRuleEngine {
    /// Create the engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RuleEngine for BuiltinRuleEngine {
    fn evaluate(
        &self,
        card: &Card,
        rules: &[RuleRef],
        options: &EvaluationOptions<'_>,
    ) -> EvaluationResult {
        let errors = rules.iter().filter_map(|rule| check(card, rule, options)).collect();
        EvaluationResult::from_errors(errors)
    }
}

/// Run one rule; `Some(message)` on failure
fn check(card: &Card, rule: &RuleRef, options: &EvaluationOptions<'_>) -> Option<String> {
    let failure = match rule.rule.as_str() {
        "title_min_length" => {
            let min = rule.u64_param("min").unwrap_or(DEFAULT_TITLE_MIN);
            let len = card.name.trim().chars().count() as u64;
            (len < min).then(|| format!("title should be at least {min} characters long"))
        },
        "title_pattern" => title_pattern(card, rule),
        "has_description" => {
            card.desc.trim().is_empty().then(|| "card needs a description".to_string())
        },
        "has_members" => {
            card.id_members.is_empty().then(|| "card needs at least one member".to_string())
        },
        "has_labels" => card.labels.is_empty().then(|| "card needs at least one label".to_string()),
        "has_due_date" => card.due.is_none().then(|| "card needs a due date".to_string()),
        "has_attachment" => {
            card.attachments.is_empty().then(|| "card needs at least one attachment".to_string())
        },
        "has_checklist" => has_checklist(card, rule),
        "checklists_complete" => card
            .checklists
            .iter()
            .find(|checklist| !checklist.is_complete())
            .map(|checklist| format!("checklist '{}' has unchecked items", checklist.name)),
        "moved_from" => moved_from(rule, options),
        other => {
            warn!("Unknown rule '{other}' skipped");
            None
        },
    };

    failure.map(|default| rule.str_param("message").map_or(default, str::to_string))
}

fn title_pattern(card: &Card, rule: &RuleRef) -> Option<String> {
    let Some(pattern) = rule.str_param("pattern") else {
        warn!("Rule 'title_pattern' has no pattern; skipped");
        return None;
    };
    match Regex::new(pattern) {
        Ok(re) => (!re.is_match(&card.name)).then(|| format!("title should match `{pattern}`")),
        Err(err) => {
            warn!("Rule 'title_pattern' has an invalid pattern: {err}");
            None
        },
    }
}

fn has_checklist(card: &Card, rule: &RuleRef) -> Option<String> {
    match rule.str_param("name") {
        Some(name) => (!card.checklists.iter().any(|c| c.name.eq_ignore_ascii_case(name)))
            .then(|| format!("card needs a '{name}' checklist")),
        None => card.checklists.is_empty().then(|| "card needs a checklist".to_string()),
    }
}

fn moved_from(rule: &RuleRef, options: &EvaluationOptions<'_>) -> Option<String> {
    let EventKind::Update(UpdateKind::MoveToList {
        list_before: Some(before),
        list_after,
    }) = &options.event.kind
    else {
        return None;
    };

    let allowed: Vec<&str> = rule
        .params
        .get("lists")
        .and_then(serde_json::Value::as_array)
        .map(|lists| lists.iter().filter_map(serde_json::Value::as_str).collect())
        .unwrap_or_default();

    (!allowed.iter().any(|name| name.eq_ignore_ascii_case(&before.name))).then(|| {
        format!("cards may not move from '{}' to '{}'", before.name, list_after.name)
    })
}
