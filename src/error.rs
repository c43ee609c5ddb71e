//! Error types for the library inventory server

use axum::{
    extract::rejection::{BytesRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const BOOK_NOT_FOUND: &str = "The book that you're searching isn't on our library";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    MalformedBody(String),

    #[error("Missing {0} query parameter")]
    MissingQueryParameter(&'static str),

    #[error("{0}")]
    NotFound(String),

    #[error("Book not available")]
    QuantityExhausted(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn book_not_found() -> Self {
        AppError::NotFound(BOOK_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(_)
            | AppError::MissingQueryParameter(_)
            | AppError::QuantityExhausted(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong
    #[serde(rename = "ERROR")]
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::book_not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::MissingQueryParameter("id").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::QuantityExhausted("1".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MalformedBody("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::MissingQueryParameter("id").to_string(),
            "Missing id query parameter"
        );
        assert_eq!(AppError::book_not_found().to_string(), BOOK_NOT_FOUND);
        assert_eq!(
            AppError::QuantityExhausted("4".into()).to_string(),
            "Book not available"
        );
    }

    #[test]
    fn test_error_body_uses_upper_case_key() {
        let body = serde_json::to_value(ErrorResponse {
            error: "nope".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "ERROR": "nope" }));
    }
}
