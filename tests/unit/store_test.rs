//! Tests for tracking store adapters

use cardwarden::adapters::file::JsonFileCardStore;
use cardwarden::core::models::{Card, TrackingRecord};
use cardwarden::core::ports::{CardStore, StorageBackend};
use tempfile::TempDir;

// =============================================================================
// BACKEND TESTS
// =============================================================================

#[test]
fn test_backend_from_str() {
    assert_eq!("memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
    assert_eq!("FILE".parse::<StorageBackend>().unwrap(), StorageBackend::File);
    assert_eq!("json".parse::<StorageBackend>().unwrap(), StorageBackend::File);
}

#[test]
fn test_backend_from_str_unknown() {
    let result = "redis".parse::<StorageBackend>();
    assert!(result.unwrap_err().contains("Unknown backend"));
}

#[test]
fn test_backend_default_and_display() {
    assert_eq!(StorageBackend::default(), StorageBackend::Memory);
    assert_eq!(StorageBackend::File.to_string(), "file");
}

// =============================================================================
// JSON FILE STORE TESTS
// =============================================================================

#[tokio::test]
async fn test_file_store_round_trip() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileCardStore::new(temp.path().join("nested/dir/tracked.json"));

    assert!(store.find("C1").await.unwrap().is_none());
    store.create(&TrackingRecord::for_card(&Card::new("C1", "Fix login"))).await.unwrap();
    store.create(&TrackingRecord::new("C0")).await.unwrap();

    let found = store.find("C1").await.unwrap().unwrap();
    assert_eq!(found.card_name.as_deref(), Some("Fix login"));

    let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|r| r.card_id).collect();
    assert_eq!(ids, vec!["C0", "C1"]);
}

#[tokio::test]
async fn test_file_store_persists_across_instances() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tracked.json");

    JsonFileCardStore::new(&path).create(&TrackingRecord::new("C1")).await.unwrap();

    let reopened = JsonFileCardStore::new(&path);
    assert!(reopened.find("C1").await.unwrap().is_some());
    reopened.delete("C1").await.unwrap();
    assert!(JsonFileCardStore::new(&path).find("C1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_file_store_create_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileCardStore::new(temp.path().join("tracked.json"));

    store.create(&TrackingRecord::new("C1")).await.unwrap();
    store.create(&TrackingRecord::for_card(&Card::new("C1", "Renamed"))).await.unwrap();

    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].card_name.as_deref(), Some("Renamed"));
}

#[tokio::test]
async fn test_file_store_delete_missing_is_ok() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileCardStore::new(temp.path().join("tracked.json"));

    assert!(store.delete("C1").await.is_ok());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_file_store_rejects_corrupt_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tracked.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(JsonFileCardStore::new(&path).find("C1").await.is_err());
}
