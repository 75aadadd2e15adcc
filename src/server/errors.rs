//! HTTP error mapping for the service layer.
//!
//! Validation failures answer 422 with the full list of offending fields;
//! persistence failures answer 500 with a bounded cause excerpt. Both are
//! request-local and never affect other in-flight requests.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{FieldIssue, ValidationError};
use crate::store::StoreError;

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Request-terminating errors surfaced to clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed schema validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The write was rejected or no store is connected.
    #[error("failed to save request: {0}")]
    Persistence(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    /// Per-field detail, present only for validation failures
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FieldIssue>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let issues = match err {
            ApiError::Validation(validation) => validation.issues().to_vec(),
            ApiError::Persistence(_) => Vec::new(),
        };
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            issues,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = ApiError::Validation(ValidationError::new(
            "requestticket",
            vec![FieldIssue::missing("name")],
        ));
        assert_eq!(validation.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let persistence = ApiError::Persistence(StoreError::NotConnected);
        assert_eq!(persistence.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_body_carries_issues() {
        let err = ApiError::Validation(ValidationError::new(
            "requestticket",
            vec![FieldIssue::missing("name"), FieldIssue::missing("email")],
        ));

        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, 422);
        assert_eq!(body.issues.len(), 2);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["issues"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_persistence_body_omits_issues() {
        let err = ApiError::Persistence(StoreError::NotConnected);

        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, 500);
        assert!(body.error.contains("failed to save request"));

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("issues").is_none());
    }
}
