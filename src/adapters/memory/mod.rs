//! In-memory tracking store
//!
//! Implements `CardStore` over a map guarded by an async mutex. Records live
//! only as long as the process.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::core::models::TrackingRecord;
use crate::core::ports::CardStore;

/// Process-local tracking store
#[derive(Debug, Default)]
pub struct MemoryCardStore {
    records: Mutex<BTreeMap<String, TrackingRecord>>,
}

impl MemoryCardStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CardStore for MemoryCardStore {
    async fn create(&self, record: &TrackingRecord) -> anyhow::Result<()> {
        self.records.lock().await.insert(record.card_id.clone(), record.clone());
        Ok(())
    }

    async fn find(&self, card_id: &str) -> anyhow::Result<Option<TrackingRecord>> {
        Ok(self.records.lock().await.get(card_id).cloned())
    }

    async fn delete(&self, card_id: &str) -> anyhow::Result<()> {
        self.records.lock().await.remove(card_id);
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<TrackingRecord>> {
        Ok(self.records.lock().await.values().cloned().collect())
    }
}
