//! Root health check endpoint

use axum::response::IntoResponse;
use serde::Serialize;

use crate::api::types::Json;

/// GET / response body
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

/// GET / - liveness check
pub async fn root() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        message: format!("Course Materials RAG API is running (v{})", env!("CARGO_PKG_VERSION")),
    })
}
