//! Integration tests for the storage adapter
//!
//! Reads degrade to empty results on backend failure; inserts propagate.


use std::sync::Arc;
use test_helpers::*;
use vidlist_core::types::*;
use vidlist_storage::Storage;

#[tokio::test]
async fn test_reads_degrade_on_backend_failure() {
    let failing = Arc::new(FailingStore::default());
    let storage = Storage::new(failing.clone());

    assert!(storage.list_all().await.is_empty());
    assert!(storage
        .get_by_identifier(&PlaylistId::new("anything"))
        .await
        .is_none());
    assert!(!storage.identifier_exists(&PlaylistId::new("anything")).await);

    assert_eq!(failing.calls(), 3);
}

#[tokio::test]
async fn test_insert_failure_propagates() {
    let storage = Storage::new(Arc::new(FailingStore::default()));

    let result = storage
        .insert(playlist("a", "A", &["https://vimeo.com/1"], 0))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, vidlist_core::VidlistError::Backend(_)));
}

#[tokio::test]
async fn test_open_without_credentials_uses_memory() {
    let storage = Storage::open(None, None, None).unwrap();
    assert_eq!(storage.backend(), StorageBackend::InMemory);

    let storage = Storage::open(Some("https://abc.supabase.co"), None, None).unwrap();
    assert_eq!(storage.backend(), StorageBackend::InMemory);

    let storage = Storage::open(Some("https://abc.supabase.co"), Some("   "), None).unwrap();
    assert_eq!(storage.backend(), StorageBackend::InMemory);
}

#[tokio::test]
async fn test_open_with_credentials_uses_supabase() {
    let storage = Storage::open(Some("https://abc.supabase.co"), Some("anon"), None).unwrap();
    assert_eq!(storage.backend(), StorageBackend::Supabase);
}

#[tokio::test]
async fn test_open_rejects_bad_url() {
    assert!(Storage::open(Some("abc.supabase.co"), Some("anon"), None).is_err());
}

#[tokio::test]
async fn test_in_memory_round_trip() {
    let storage = Storage::in_memory();
    let stored = storage
        .insert(playlist(
            "trip",
            "Trip",
            &["https://vimeo.com/1", "https://vimeo.com/2"],
            0,
        ))
        .await
        .unwrap();

    let fetched = storage.get_by_identifier(&stored.id).await.unwrap();
    assert_eq!(fetched.urls, vec!["https://vimeo.com/1", "https://vimeo.com/2"]);
    assert!(storage.identifier_exists(&stored.id).await);
}
