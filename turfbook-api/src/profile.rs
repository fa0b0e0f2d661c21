use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use turfbook_core::{nav_links, NavItem, ProfileView};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile))
        .route("/nav", get(navigation))
}

/// GET /profile
async fn profile(State(state): State<AppState>) -> Response {
    let user = state.auth.current_user();

    match ProfileView::build(&state.catalog, user.as_ref()) {
        Some(view) => Json(view).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// GET /nav
async fn navigation(State(state): State<AppState>) -> Json<Vec<NavItem>> {
    Json(nav_links(&state.auth.snapshot()))
}
