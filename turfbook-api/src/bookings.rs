use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use turfbook_core::{BookingDialog, BookingOutcome};
use turfbook_shared::form::empty_as_none;
use crate::{error::AppError, state::AppState};

pub const LOGIN_TO_BOOK: &str = "Please login to book a turf";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Defaults to today; an empty date field counts as unset
    #[serde(default, deserialize_with = "empty_as_none")]
    pub date: Option<NaiveDate>,
    pub time_slot: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub turf_id: String,
    #[serde(flatten)]
    pub outcome: BookingOutcome,
    /// Always false: confirmations are not recorded anywhere
    pub persisted: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/turfs/{turf_id}/bookings", post(submit_booking))
}

/// POST /turfs/{turf_id}/bookings
async fn submit_booking(
    State(state): State<AppState>,
    Path(turf_id): Path<String>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let turf = state
        .catalog
        .get(&turf_id)
        .ok_or_else(|| AppError::NotFoundError(format!("Turf not found: {}", turf_id)))?;

    if !state.auth.snapshot().is_authenticated() {
        return Err(AppError::LoginRequired(LOGIN_TO_BOOK.to_string()));
    }

    let mut dialog = BookingDialog::open(turf, chrono::Utc::now().date_naive());
    if let Some(date) = req.date {
        dialog.select_date(date);
    }
    if let Some(slot) = req.time_slot.as_deref().filter(|s| !s.is_empty()) {
        dialog.select_time(slot)?;
    }

    match dialog.submit() {
        BookingOutcome::Rejected { notice } => Err(AppError::ValidationError(notice)),
        outcome => Ok(Json(BookingResponse {
            turf_id: turf.id.clone(),
            outcome,
            persisted: false,
        })),
    }
}
