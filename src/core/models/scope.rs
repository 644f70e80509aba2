//! Per-board (scope) configuration
//!
//! Owned by the configuration source; the reconciler only reads it.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::RuleRef;

/// Rules and defaults for one board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Rules applied to every update
    #[serde(default)]
    pub base_rules: Vec<RuleRef>,

    /// Extra rules applied when a card lands in a list, keyed by lowercase list name
    #[serde(default)]
    pub list_rules: HashMap<String, Vec<RuleRef>>,

    /// Scope-wide defaults
    #[serde(default)]
    pub defaults: ScopeDefaults,

    /// Run the full rule set on card creation instead of just tracking the card
    #[serde(default)]
    pub evaluate_on_create: bool,
}

impl ScopeConfig {
    /// Create a scope with base rules and a notification target
    #[must_use]
    pub fn new(base_rules: Vec<RuleRef>, target: impl Into<String>) -> Self {
        Self {
            base_rules,
            defaults: ScopeDefaults {
                notification_target: NotificationTarget::new(target),
            },
            ..Self::default()
        }
    }

    /// Add rules for a list; the name is stored lowercased
    #[must_use]
    pub fn with_list_rules(mut self, list_name: &str, rules: Vec<RuleRef>) -> Self {
        self.list_rules.insert(list_name.to_lowercase(), rules);
        self
    }

    /// Lowercase every list-rule key so lookups match case-insensitively
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.list_rules =
            self.list_rules.into_iter().map(|(name, rules)| (name.to_lowercase(), rules)).collect();
        self
    }

    /// Rules configured for a destination list (case-insensitive, not trimmed)
    #[must_use]
    pub fn rules_for_list(&self, list_name: &str) -> &[RuleRef] {
        self.list_rules.get(&list_name.to_lowercase()).map(Vec::as_slice).unwrap_or_default()
    }

    /// Where violation messages go
    #[must_use]
    pub const fn notification_target(&self) -> &NotificationTarget {
        &self.defaults.notification_target
    }
}

/// Scope-wide defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeDefaults {
    /// Channel that receives violation messages
    #[serde(default)]
    pub notification_target: NotificationTarget,
}

/// A notification destination (e.g. a chat channel name)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationTarget(pub String);

impl NotificationTarget {
    /// Create a target
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    /// The target as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
