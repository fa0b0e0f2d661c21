use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use turfbook_catalog::{is_favorite, SearchFilters, EMPTY_SEARCH_MESSAGE, SPORT_OPTIONS};
use turfbook_core::BookingDialog;
use turfbook_shared::Turf;
use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurfCard {
    #[serde(flatten)]
    pub turf: Turf,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurfListResponse {
    pub turfs: Vec<TurfCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurfDetailsResponse {
    pub turf: Turf,
    pub is_favorite: bool,
    pub booking: BookingDialog,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/turfs", get(list_turfs))
        .route("/turfs/{turf_id}", get(turf_details))
        .route("/sports", get(list_sports))
}

/// GET /turfs
/// Home listing filtered by the search form
async fn list_turfs(
    State(state): State<AppState>,
    Query(query): Query<SearchFilters>,
) -> Json<TurfListResponse> {
    let user = state.auth.current_user();

    let turfs: Vec<TurfCard> = state
        .catalog
        .search(&query)
        .into_iter()
        .map(|turf| TurfCard {
            turf: turf.clone(),
            is_favorite: is_favorite(user.as_ref(), &turf.id),
        })
        .collect();

    tracing::debug!(location = %query.location, sport = %query.sport, matches = turfs.len(), "Turf search");

    let empty_message = turfs.is_empty().then_some(EMPTY_SEARCH_MESSAGE);
    Json(TurfListResponse { turfs, empty_message })
}

/// GET /turfs/{turf_id}
/// Details dialog, opened on today's date
async fn turf_details(
    State(state): State<AppState>,
    Path(turf_id): Path<String>,
) -> Result<Json<TurfDetailsResponse>, AppError> {
    let turf = state
        .catalog
        .get(&turf_id)
        .ok_or_else(|| AppError::NotFoundError(format!("Turf not found: {}", turf_id)))?;

    let user = state.auth.current_user();
    let today = chrono::Utc::now().date_naive();

    Ok(Json(TurfDetailsResponse {
        turf: turf.clone(),
        is_favorite: is_favorite(user.as_ref(), &turf.id),
        booking: BookingDialog::open(turf, today),
    }))
}

/// GET /sports
async fn list_sports() -> Json<Vec<&'static str>> {
    Json(SPORT_OPTIONS.to_vec())
}
