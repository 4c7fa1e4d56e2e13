/// Send endpoint - validates the payload and relays the email
use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use serde::Serialize;
use tracing::{error, info};

use mailgate_core::email::compose;
use mailgate_core::models::EmailRequest;
use mailgate_core::utils::{redact_email, redact_subject};

use crate::{context::ApiContext, error::ApiError};

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub success: String,
}

/// Relays one email built from the request body.
///
/// The body is taken raw and parsed here rather than through the JSON
/// extractor: in this contract a malformed document is an internal failure
/// (500), while absent or empty fields surface as per-field validation
/// errors (400). The relay is only reached once all six fields pass.
pub async fn handler(
    State(ctx): State<Arc<ApiContext>>,
    body: Bytes,
) -> Result<Json<SendResponse>, ApiError> {
    let request: EmailRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("Invalid request JSON: {}", e)))?;

    let email = request.validate().map_err(ApiError::Validation)?;

    info!(
        from = %redact_email(&email.from),
        to = %redact_email(&email.to),
        subject = %redact_subject(&email.subject),
        "Relaying email"
    );

    let message = compose(&email)?;

    ctx.relay.relay(message, &email).await.map_err(|e| {
        error!(
            from = %redact_email(&email.from),
            to = %redact_email(&email.to),
            error = %e,
            "Relay failed"
        );
        ApiError::from(e)
    })?;

    info!(to = %redact_email(&email.to), "Email relayed successfully");

    Ok(Json(SendResponse {
        success: "Email sent successfully!".to_string(),
    }))
}
