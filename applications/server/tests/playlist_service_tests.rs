/// Playlist service tests
mod common;

use common::{fixtures, FailingStore};
use std::sync::Arc;
use vidlist_core::{
    types::{CreatePlaylist, PlaylistId},
    VidlistError,
};
use vidlist_server::services::PlaylistService;
use vidlist_storage::Storage;

fn service() -> PlaylistService {
    PlaylistService::new(Storage::in_memory())
}

fn trip() -> CreatePlaylist {
    CreatePlaylist::new(fixtures::TRIP_NAME, vec![fixtures::TRIP_URL.to_string()])
}

#[tokio::test]
async fn test_create_uses_slug_of_name() {
    let id = service().create(trip()).await.unwrap();
    assert_eq!(id, PlaylistId::new("my-trip"));
}

#[tokio::test]
async fn test_colliding_names_get_distinct_ids() {
    let service = service();

    let first = service.create(trip()).await.unwrap();
    let second = service.create(trip()).await.unwrap();

    assert_ne!(first, second);
    assert!(second.as_str().starts_with("my-trip-"));
    assert_eq!(service.list().await.len(), 2);
}

#[tokio::test]
async fn test_unsluggable_name_gets_random_id() {
    let service = service();
    let id = service
        .create(CreatePlaylist::new("!!!", vec![fixtures::TRIP_URL.to_string()]))
        .await
        .unwrap();

    assert_eq!(id.as_str().len(), 4);
    assert_eq!(service.get(&id).await.unwrap().name, "!!!");
}

#[tokio::test]
async fn test_get_preserves_trimmed_name_and_url_order() {
    let service = service();
    let urls: Vec<String> = ["https://vimeo.com/3", "https://vimeo.com/1", "https://vimeo.com/2"]
        .iter()
        .map(|u| u.to_string())
        .collect();

    let id = service
        .create(CreatePlaylist::new("  Ordered  ", urls.clone()))
        .await
        .unwrap();
    let playlist = service.get(&id).await.unwrap();

    assert_eq!(playlist.name, "Ordered");
    assert_eq!(playlist.urls, urls);
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let err = service()
        .get(&PlaylistId::new("does-not-exist"))
        .await
        .unwrap_err();
    assert!(matches!(err, VidlistError::NotFound { .. }));
}

#[tokio::test]
async fn test_validation_skips_storage() {
    let store = Arc::new(FailingStore::default());
    let service = PlaylistService::new(Storage::new(store.clone()));

    let err = service
        .create(CreatePlaylist::new("", vec![fixtures::TRIP_URL.to_string()]))
        .await
        .unwrap_err();
    assert!(matches!(err, VidlistError::Validation(_)));

    let err = service
        .create(CreatePlaylist::new("Trip", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, VidlistError::Validation(_)));

    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn test_insert_failure_propagates() {
    let store = Arc::new(FailingStore::default());
    let service = PlaylistService::new(Storage::new(store.clone()));

    let err = service.create(trip()).await.unwrap_err();

    assert!(matches!(err, VidlistError::Backend(_)));
    // exists check, then insert
    assert_eq!(store.calls(), 2);
}
