//! Card store port
//!
//! Defines the interface for persisting tracking records.

use async_trait::async_trait;

use super::super::models::TrackingRecord;

/// Storage backend for tracking records
///
/// Implementations must be read-after-write consistent for a single key.
/// No versioning is expected: concurrent writers for the same card race and
/// the last one wins.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Persist a record, replacing any existing record for the same card
    async fn create(&self, record: &TrackingRecord) -> anyhow::Result<()>;

    /// Look up the record for a card
    async fn find(&self, card_id: &str) -> anyhow::Result<Option<TrackingRecord>>;

    /// Delete the record for a card
    ///
    /// Deleting a card that has no record is not an error.
    async fn delete(&self, card_id: &str) -> anyhow::Result<()>;

    /// List every record, ordered by card id
    async fn list(&self) -> anyhow::Result<Vec<TrackingRecord>>;
}

/// Storage backend type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process memory (lost on restart)
    #[default]
    Memory,
    /// A JSON file on disk
    File,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown backend: {s}. Use 'memory' or 'file'")),
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}
