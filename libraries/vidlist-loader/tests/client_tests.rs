//! HTTP client tests against a mock server.

use serde_json::json;
use vidlist_core::types::PlaylistId;
use vidlist_loader::{LoaderError, MetadataFetcher, OembedClient, PlaylistApiClient};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// oEmbed
// =============================================================================

#[tokio::test]
async fn test_oembed_fetch_returns_title_and_thumbnail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/oembed.json"))
        .and(query_param("url", "https://vimeo.com/76979871"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "video",
            "title": "The New Vimeo Player",
            "thumbnail_url": "https://i.vimeocdn.com/video/452001751_295x166.jpg",
            "duration": 62
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OembedClient::with_endpoint(format!("{}/api/oembed.json", server.uri())).unwrap();
    let meta = client.fetch("https://vimeo.com/76979871").await.unwrap();

    assert_eq!(meta.title, "The New Vimeo Player");
    assert_eq!(
        meta.thumbnail_url,
        "https://i.vimeocdn.com/video/452001751_295x166.jpg"
    );
}

#[tokio::test]
async fn test_oembed_not_found_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/oembed.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = OembedClient::with_endpoint(format!("{}/api/oembed.json", server.uri())).unwrap();
    let err = client.fetch("https://vimeo.com/1").await.unwrap_err();

    match err {
        LoaderError::MetadataFetch { url, message } => {
            assert_eq!(url, "https://vimeo.com/1");
            assert_eq!(message, "status 404");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// =============================================================================
// Playlist API
// =============================================================================

#[tokio::test]
async fn test_list_playlists() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "b", "name": "B", "urls": ["https://vimeo.com/1"]},
            {"id": "a", "name": "A", "urls": []}
        ])))
        .mount(&server)
        .await;

    let client = PlaylistApiClient::new(&server.uri()).unwrap();
    let playlists = client.list().await.unwrap();

    assert_eq!(playlists.len(), 2);
    assert_eq!(playlists[0].id, PlaylistId::new("b"));
    assert_eq!(playlists[0].urls, vec!["https://vimeo.com/1"]);
}

#[tokio::test]
async fn test_create_posts_name_and_urls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/playlists"))
        .and(body_json(json!({
            "name": "My Trip!",
            "urls": ["https://vimeo.com/111"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "my-trip"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = PlaylistApiClient::new(&server.uri()).unwrap();
    let id = client
        .create("My Trip!", vec!["https://vimeo.com/111".to_string()])
        .await
        .unwrap();

    assert_eq!(id, PlaylistId::new("my-trip"));
}

#[tokio::test]
async fn test_get_missing_playlist_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/playlists/does-not-exist"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Playlist not found"})),
        )
        .mount(&server)
        .await;

    let client = PlaylistApiClient::new(&server.uri()).unwrap();
    let err = client
        .get(&PlaylistId::new("does-not-exist"))
        .await
        .unwrap_err();

    match err {
        LoaderError::ServerError { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Playlist not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_error_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/playlists"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            json!({"error": "urls must be a non-empty array"}),
        ))
        .mount(&server)
        .await;

    let client = PlaylistApiClient::new(&server.uri()).unwrap();
    let err = client.create("x", vec![]).await.unwrap_err();

    assert!(matches!(
        err,
        LoaderError::ServerError { status: 400, ref message } if message == "urls must be a non-empty array"
    ));
}

#[tokio::test]
async fn test_health_reports_storage_mode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "storage": "in-memory",
            "timestamp": "2026-10-18T12:00:00Z",
            "version": "0.1.0"
        })))
        .mount(&server)
        .await;

    let client = PlaylistApiClient::new(&server.uri()).unwrap();
    let health = client.health().await.unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.storage, "in-memory");
}
