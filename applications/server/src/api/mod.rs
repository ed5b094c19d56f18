/// API routes and the application router
pub mod health;
pub mod playlists;
pub mod web;

use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Maximum accepted request body
pub const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Build the full application router.
pub fn router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route(
            "/playlists",
            get(playlists::list_playlists).post(playlists::create_playlist),
        )
        .route("/playlists/:id", get(playlists::get_playlist))
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api_routes)
        .fallback(web::spa_fallback)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "API endpoint not found" })),
    )
}
