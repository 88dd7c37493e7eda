//! Health check endpoints

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Health response body
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check for orchestrator probes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
