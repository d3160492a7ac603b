use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    provider: String,
}

/// Health check endpoint
///
/// Provider check is structural (the handle is always present if the
/// app started); no live API call is made. Returns 200 OK.
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            provider: "ok".to_string(),
        }),
    )
}
