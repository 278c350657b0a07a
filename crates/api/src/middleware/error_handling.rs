//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way. Backend failures are logged with their
//! detail but surface to the client as a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use academy_core::errors::AcademyError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// Wraps [`AcademyError`] and implements `IntoResponse`, so handlers can
/// return `Result<T, AppError>` and use `?` on gate and store calls.
#[derive(Debug)]
pub struct AppError(pub AcademyError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AcademyError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            AcademyError::DuplicateAccount(_) => (StatusCode::CONFLICT, self.0.to_string()),
            AcademyError::AccountNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            AcademyError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.0.to_string()),
            AcademyError::Backend(report) => {
                tracing::error!("Backend failure: {report:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error. If using cloud DB, check connection.".to_string(),
                )
            }
            AcademyError::Internal(_) => {
                tracing::error!("Internal failure: {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<AcademyError> for AppError {
    fn from(err: AcademyError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AcademyError::Backend(err))
    }
}
