//! List tracked cards

use cardwarden::adapters;
use cardwarden::config::AppConfig;
use cardwarden::output::{OutputMode, TrackedList};

/// Print every tracking record in the configured store
pub fn tracked(config: &AppConfig, mode: OutputMode) -> anyhow::Result<()> {
    let store = adapters::card_store(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let records = runtime.block_on(store.list())?;

    TrackedList { records }.render(mode);
    Ok(())
}
