//! Scope configuration port
//!
//! Defines the interface for resolving per-board configuration.

use std::sync::Arc;

use super::super::models::ScopeConfig;

/// Resolves the configuration for a board
///
/// Called once per event. The returned config is a read-only snapshot; the
/// provider may refresh its source out of band.
pub trait ScopeConfigProvider: Send + Sync {
    /// Configuration for `scope_id`, or `None` when the board is not configured
    fn scope_config(&self, scope_id: &str) -> Option<Arc<ScopeConfig>>;
}
