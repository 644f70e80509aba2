//! Config-backed scope provider
//!
//! Implements `ScopeConfigProvider` over the `[scopes]` table of the
//! configuration file.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::models::ScopeConfig;
use crate::core::ports::ScopeConfigProvider;

/// Serves scope configs from a fixed map
#[derive(Debug, Clone, Default)]
pub struct ConfigScopeProvider {
    scopes: HashMap<String, Arc<ScopeConfig>>,
}

impl ConfigScopeProvider {
    /// Build from board id -> config pairs
    #[must_use]
    pub fn new(scopes: HashMap<String, ScopeConfig>) -> Self {
        Self {
            scopes: scopes.into_iter().map(|(id, scope)| (id, Arc::new(scope))).collect(),
        }
    }

    /// Number of configured boards
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Whether no board is configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl ScopeConfigProvider for ConfigScopeProvider {
    fn scope_config(&self, scope_id: &str) -> Option<Arc<ScopeConfig>> {
        self.scopes.get(scope_id).cloned()
    }
}
