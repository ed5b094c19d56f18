/// Static web UI with SPA fallback
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Serve a file from the web directory, or `index.html` for unknown paths.
pub async fn spa_fallback(State(app_state): State<AppState>, req: Request<Body>) -> Response {
    let Some(web_dir) = app_state.web_dir.clone() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let path = req.uri().path().trim_start_matches('/');
    let file_path = web_dir.join(path);

    if !path.is_empty() && file_path.is_file() {
        return match ServeDir::new(&web_dir).oneshot(req).await {
            Ok(res) => res.into_response(),
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        };
    }

    let index_path = web_dir.join("index.html");
    match tokio::fs::read(&index_path).await {
        Ok(contents) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            contents,
        )
            .into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
