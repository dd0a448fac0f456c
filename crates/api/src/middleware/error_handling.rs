//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Courtside
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! A booking conflict is a normal domain outcome, not a transport failure;
//! it maps to `409 Conflict` so clients can branch on it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use courtside_core::errors::CourtsideError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `CourtsideError` instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub CourtsideError);

/// Converts application errors to HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            CourtsideError::NotFound(_) => StatusCode::NOT_FOUND,
            CourtsideError::Validation(_) => StatusCode::BAD_REQUEST,
            CourtsideError::Authentication(_) => StatusCode::UNAUTHORIZED,
            CourtsideError::Authorization(_) => StatusCode::FORBIDDEN,
            CourtsideError::Conflict(_) => StatusCode::CONFLICT,
            CourtsideError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CourtsideError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Allows using `?` with functions returning `Result<T, CourtsideError>`
/// in handlers that return `Result<T, AppError>`.
impl From<CourtsideError> for AppError {
    fn from(err: CourtsideError) -> Self {
        AppError(err)
    }
}

/// Wraps repository-level `eyre::Report` failures as database errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(CourtsideError::Database(err))
    }
}
