use axum::{
    extract::State,
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
    Json, Router,
};
use futures_util::{Stream, StreamExt};
use serde::Deserialize;
use std::convert::Infallible;
use tokio_stream::wrappers::WatchStream;
use turfbook_core::AuthState;
use turfbook_shared::{Masked, User};
use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Masked<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: Masked<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
        .route("/auth/session/stream", get(session_stream))
}

/// POST /auth/login
/// Credentials are not checked
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<User>, AppError> {
    let user = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(user))
}

/// POST /auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<User>, AppError> {
    let user = state.auth.register(&req.name, &req.email, &req.password).await?;
    Ok(Json(user))
}

/// POST /auth/logout
async fn logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.auth.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/session
async fn session(State(state): State<AppState>) -> Json<AuthState> {
    Json(state.auth.snapshot())
}

/// GET /auth/session/stream
/// Current snapshot first, then one `session` event per change
async fn session_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = WatchStream::new(state.auth.subscribe()).map(|snapshot| {
        let event = Event::default()
            .event("session")
            .json_data(&snapshot)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to encode session snapshot: {}", e);
                Event::default().event("session_error")
            });
        Ok::<_, Infallible>(event)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
