//! Rule reference model
//!
//! The core never interprets a rule. It only carries the configured
//! references, in order, from the scope configuration to the rule engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A configured rule: a name plus engine-specific parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRef {
    /// Rule name understood by the engine (e.g. `title_min_length`)
    pub rule: String,

    /// Remaining keys of the rule table, passed through untouched
    #[serde(flatten)]
    pub params: BTreeMap<String, serde_json::Value>,
}

impl RuleRef {
    /// Reference a rule with no parameters
    #[must_use]
    pub fn new(rule: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// String parameter, if present and a string
    #[must_use]
    pub fn str_param(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(serde_json::Value::as_str)
    }

    /// Unsigned integer parameter, if present and numeric
    #[must_use]
    pub fn u64_param(&self, key: &str) -> Option<u64> {
        self.params.get(key).and_then(serde_json::Value::as_u64)
    }
}
