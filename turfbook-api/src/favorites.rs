use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use turfbook_catalog::{favorites, EMPTY_FAVORITES_MESSAGE};
use turfbook_core::CoreResult;
use turfbook_shared::{Turf, User};
use crate::{error::AppError, state::AppState};

pub const LOGIN_TO_FAVORITE: &str = "Please login to add to favorites";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub turfs: Vec<Turf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    pub turf_id: String,
    pub is_favorite: bool,
    pub favorites: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(list_favorites))
        .route("/favorites/{turf_id}", post(add_favorite).delete(remove_favorite))
        .route("/favorites/{turf_id}/toggle", post(toggle_favorite))
}

/// GET /favorites
/// 204 when nobody is signed in: the page renders nothing
async fn list_favorites(State(state): State<AppState>) -> Response {
    let user = state.auth.current_user();

    match favorites(state.catalog.turfs(), user.as_ref()) {
        None => StatusCode::NO_CONTENT.into_response(),
        Some(turfs) => {
            let turfs: Vec<Turf> = turfs.into_iter().cloned().collect();
            let empty_message = turfs.is_empty().then_some(EMPTY_FAVORITES_MESSAGE);
            Json(FavoritesResponse { turfs, empty_message }).into_response()
        }
    }
}

async fn add_favorite(
    State(state): State<AppState>,
    Path(turf_id): Path<String>,
) -> Result<Json<FavoriteStatus>, AppError> {
    ensure_known(&state, &turf_id)?;
    favorite_status(&turf_id, state.auth.add_favorite(&turf_id).await)
}

async fn remove_favorite(
    State(state): State<AppState>,
    Path(turf_id): Path<String>,
) -> Result<Json<FavoriteStatus>, AppError> {
    ensure_known(&state, &turf_id)?;
    favorite_status(&turf_id, state.auth.remove_favorite(&turf_id).await)
}

/// POST /favorites/{turf_id}/toggle
/// The heart button on a card
async fn toggle_favorite(
    State(state): State<AppState>,
    Path(turf_id): Path<String>,
) -> Result<Json<FavoriteStatus>, AppError> {
    ensure_known(&state, &turf_id)?;
    favorite_status(&turf_id, state.auth.toggle_favorite(&turf_id).await)
}

fn ensure_known(state: &AppState, turf_id: &str) -> Result<(), AppError> {
    if state.catalog.contains(turf_id) {
        Ok(())
    } else {
        Err(AppError::NotFoundError(format!("Turf not found: {}", turf_id)))
    }
}

// The store ignores favorite changes without a session; surface that as a login prompt
fn favorite_status(turf_id: &str, result: CoreResult<Option<User>>) -> Result<Json<FavoriteStatus>, AppError> {
    let user = result?.ok_or_else(|| AppError::LoginRequired(LOGIN_TO_FAVORITE.to_string()))?;

    Ok(Json(FavoriteStatus {
        turf_id: turf_id.to_string(),
        is_favorite: user.is_favorite(turf_id),
        favorites: user.favorites,
    }))
}
