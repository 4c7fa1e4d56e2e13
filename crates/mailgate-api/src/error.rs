/// API Error types
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mailgate_core::MailgateError;
use mailgate_core::models::FieldErrors;
use serde_json::json;

/// API Error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more required fields were absent or empty.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// Anything that prevented the message from being relayed: malformed
    /// request JSON, composition failure, or an SMTP rejection.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "error",
                    "errors": errors,
                })),
            )
                .into_response(),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": msg,
                })),
            )
                .into_response(),
        }
    }
}

/// Convert mailgate-core errors to API errors
impl From<MailgateError> for ApiError {
    fn from(err: MailgateError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use mailgate_core::models::EMPTY_FIELD_MESSAGE;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let mut errors = FieldErrors::new();
        errors.insert("SUBJECT", EMPTY_FIELD_MESSAGE);
        errors.insert("MESSAGE", EMPTY_FIELD_MESSAGE);

        let response = ApiError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["errors"]["SUBJECT"], "This field cannot be empty.");
        assert_eq!(body["errors"]["MESSAGE"], "This field cannot be empty.");
        assert_eq!(body["errors"].as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_internal_error_response() {
        let response = ApiError::Internal("relay unavailable".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "relay unavailable");
    }

    #[tokio::test]
    async fn test_core_error_conversion() {
        let err: ApiError = MailgateError::Smtp("connection refused".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "SMTP relay error: connection refused");
    }
}
