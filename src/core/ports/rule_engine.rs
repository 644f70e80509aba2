//! Rule engine port
//!
//! Defines the interface for evaluating rules against a card.

use super::super::models::{Card, ChangeEvent, EvaluationResult, RuleRef};

/// Evaluates an ordered rule set against a card
///
/// Implementations are pure: same card, rules, and options give the same
/// verdict.
pub trait RuleEngine: Send + Sync {
    /// Run `rules` against `card`
    fn evaluate(
        &self,
        card: &Card,
        rules: &[RuleRef],
        options: &EvaluationOptions<'_>,
    ) -> EvaluationResult;
}

/// Context handed to rules alongside the card
#[derive(Debug, Clone, Copy)]
pub struct EvaluationOptions<'a> {
    /// The event that triggered the evaluation; rules read transition
    /// context from its kind and raw `data`
    pub event: &'a ChangeEvent,
}

impl<'a> EvaluationOptions<'a> {
    /// Options for an evaluation triggered by `event`
    #[must_use]
    pub const fn for_event(event: &'a ChangeEvent) -> Self {
        Self { event }
    }
}
