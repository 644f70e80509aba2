//! Evaluation result model

use serde::Serialize;

/// Verdict of running a rule set against a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    /// Whether every rule passed
    pub valid: bool,
    /// One message per failed rule, in rule order
    pub errors: Vec<String>,
}

impl EvaluationResult {
    /// A passing result
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// A failing result with the given messages
    #[must_use]
    pub const fn invalid(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }

    /// Build a result from collected messages; no messages means valid
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() { Self::valid() } else { Self::invalid(errors) }
    }
}
