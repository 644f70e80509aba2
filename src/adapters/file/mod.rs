//! File-based tracking store
//!
//! Implements `CardStore` using a single JSON file. Every write rewrites the
//! whole file while holding the store's lock.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::core::models::TrackingRecord;
use crate::core::ports::CardStore;

/// JSON file store for tracking records
#[derive(Debug)]
pub struct JsonFileCardStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileCardStore {
    /// Store records at `path`; the file is created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> anyhow::Result<BTreeMap<String, TrackingRecord>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(BTreeMap::new());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let records: Vec<TrackingRecord> = serde_json::from_str(&content)?;
        Ok(records.into_iter().map(|r| (r.card_id.clone(), r)).collect())
    }

    async fn save(&self, records: &BTreeMap<String, TrackingRecord>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let list: Vec<&TrackingRecord> = records.values().collect();
        let content = serde_json::to_string_pretty(&list)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl CardStore for JsonFileCardStore {
    async fn create(&self, record: &TrackingRecord) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        records.insert(record.card_id.clone(), record.clone());
        self.save(&records).await
    }

    async fn find(&self, card_id: &str) -> anyhow::Result<Option<TrackingRecord>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(card_id))
    }

    async fn delete(&self, card_id: &str) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        if records.remove(card_id).is_some() {
            self.save(&records).await?;
        }
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<TrackingRecord>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.into_values().collect())
    }
}
