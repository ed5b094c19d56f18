//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use vidlist_core::{
    error::Result, storage::PlaylistStore, types::*, VidlistError,
};
use vidlist_server::{api, state::AppState};
use vidlist_storage::Storage;

/// Router over a fresh in-memory store, no web UI
pub fn create_test_app() -> Router {
    api::router(AppState::new(Storage::in_memory(), None))
}

/// Router over the given backend
pub fn create_app_with_store(store: Arc<dyn PlaylistStore>) -> Router {
    api::router(AppState::new(Storage::new(store), None))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Backend whose every call fails, counting how often it was hit
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(VidlistError::backend("connection refused"))
    }
}

#[async_trait]
impl PlaylistStore for FailingStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Supabase
    }

    async fn list_all(&self) -> Result<Vec<Playlist>> {
        self.fail()
    }

    async fn get_by_identifier(&self, _id: &PlaylistId) -> Result<Option<Playlist>> {
        self.fail()
    }

    async fn insert(&self, _playlist: Playlist) -> Result<Playlist> {
        self.fail()
    }

    async fn identifier_exists(&self, _id: &PlaylistId) -> Result<bool> {
        self.fail()
    }
}

pub mod fixtures {
    pub const TRIP_NAME: &str = "My Trip!";
    pub const TRIP_URL: &str = "https://vimeo.com/111";
}
