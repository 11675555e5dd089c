use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;
use wayfare_core::BookingRequest;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub summary: String,
    pub booked: bool,
    pub transaction_id: Option<String>,
    pub seat_number: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/search", post(search))
}

/// POST /search
/// Runs the booking workflow for one travel request
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(req) = payload.map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("search", %request_id, from = %req.from_city, to = %req.to_city);

    let booking = state.booking.book(&req).instrument(span).await?;

    let summary = booking
        .summary
        .ok_or_else(|| AppError::InternalServerError("Booking finished without a summary".to_string()))?;

    Ok(Json(SearchResponse {
        summary,
        booked: booking.booked,
        transaction_id: booking.transaction_id,
        seat_number: booking.seat_number,
    }))
}
