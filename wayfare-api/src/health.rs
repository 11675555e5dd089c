use axum::{routing::get, Json, Router};
use serde::Serialize;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(check))
}

/// GET /health
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
