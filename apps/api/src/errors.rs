use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::AnalysisError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Analysis(e) => analysis_status(e),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

fn analysis_status(err: &AnalysisError) -> (StatusCode, &'static str, String) {
    match err {
        AnalysisError::EmptyInput => (StatusCode::BAD_REQUEST, "EMPTY_INPUT", err.to_string()),
        AnalysisError::MissingCredential => (
            StatusCode::UNAUTHORIZED,
            "MISSING_CREDENTIAL",
            err.to_string(),
        ),
        AnalysisError::Upstream(e) => {
            tracing::error!("LLM error: {e}");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "The AI model request failed".to_string(),
            )
        }
        AnalysisError::MalformedResponse => (
            StatusCode::BAD_GATEWAY,
            "MALFORMED_RESPONSE",
            err.to_string(),
        ),
        AnalysisError::InvalidJson { .. } => {
            (StatusCode::BAD_GATEWAY, "INVALID_JSON", err.to_string())
        }
        AnalysisError::SchemaViolation(_) => {
            (StatusCode::BAD_GATEWAY, "SCHEMA_VIOLATION", err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    #[test]
    fn test_empty_input_is_bad_request() {
        let response = AppError::from(AnalysisError::EmptyInput).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_credential_is_unauthorized() {
        let response = AppError::from(AnalysisError::MissingCredential).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_upstream_and_normalization_errors_are_bad_gateway() {
        let upstream = AnalysisError::Upstream(LlmError::EmptyContent);
        assert_eq!(
            AppError::from(upstream).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::from(AnalysisError::MalformedResponse)
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_validation_is_bad_request() {
        let response = AppError::Validation("missing file".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
