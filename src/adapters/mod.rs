//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `memory/` - In-process tracking store
//! - `file/` - JSON file tracking store
//! - `rules/` - Built-in rule catalog
//! - `trello/` - Webhook action parsing and the card REST client
//! - `slack/` - Incoming-webhook notifier
//! - `console/` - Log-only notifier
//! - `scopes/` - Scope configs served from the config file

pub mod console;
pub mod file;
pub mod memory;
pub mod rules;
pub mod scopes;
pub mod slack;
pub mod trello;


use std::sync::Arc;

use crate::config::{AppConfig, ConfigError};
use crate::core::ports::{CardStore, StorageBackend};

/// Build the tracking store selected by the configuration
pub fn card_store(config: &AppConfig) -> Result<Arc<dyn CardStore>, ConfigError> {
    let store: Arc<dyn CardStore> = match config.store_backend()? {
        StorageBackend::Memory => Arc::new(memory::MemoryCardStore::new()),
        StorageBackend::File => Arc::new(file::JsonFileCardStore::new(config.store_path())),
    };
    Ok(store)
}
