/// Health probe endpoint
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Answers every GET with the same fixed payload. No input is read and
/// there is no failure path.
pub async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "success".to_string(),
        message: "GET request received".to_string(),
    })
}
