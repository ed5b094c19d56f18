/// Playlists API routes
use crate::{
    error::{Result, ServerError},
    services::playlists::URLS_REQUIRED,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;
use vidlist_core::types::{CreatePlaylist, CreatedPlaylist, PlaylistId, PlaylistSummary};

/// GET /api/playlists
/// All playlists, newest first. Storage failures yield an empty list.
pub async fn list_playlists(State(app_state): State<AppState>) -> Json<Vec<PlaylistSummary>> {
    Json(app_state.playlists.list().await)
}

/// POST /api/playlists
/// Create a playlist from `{name, urls}` and return its identifier
pub async fn create_playlist(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedPlaylist>> {
    let Json(body) = body.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let request = parse_create_request(&body)?;

    let id = app_state.playlists.create(request).await?;
    Ok(Json(CreatedPlaylist { id }))
}

/// GET /api/playlists/:id
pub async fn get_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<PlaylistSummary>> {
    let playlist = app_state.playlists.get(&PlaylistId::new(id)).await?;
    Ok(Json(playlist))
}

/// Read `{name, urls}` leniently: a wrongly typed field counts as missing
/// so it fails validation with the usual message.
fn parse_create_request(body: &Value) -> Result<CreatePlaylist> {
    let name = body
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string);

    let urls = match body.get("urls") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>()
                .ok_or_else(|| ServerError::BadRequest(URLS_REQUIRED.to_string()))?,
        ),
        Some(_) => None,
    };

    Ok(CreatePlaylist { name, urls })
}
