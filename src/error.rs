// src/error.rs

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 422 Unprocessable Entity (failed mutation, invalid payload)
    Unprocessable(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
///
/// The body always has the same shape:
/// `{"success": false, "error": <code>, "message": <canonical text>}`.
/// The detail string carried by the variant only goes to the logs.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(detail) => {
                tracing::debug!("Bad request: {}", detail);
                (StatusCode::BAD_REQUEST, "Bad Request")
            }
            AppError::NotFound(detail) => {
                tracing::debug!("Not found: {}", detail);
                (StatusCode::NOT_FOUND, "Resource Not Found")
            }
            AppError::Unprocessable(detail) => {
                tracing::warn!("Unprocessable: {}", detail);
                (StatusCode::UNPROCESSABLE_ENTITY, "Not Processable")
            }
            AppError::InternalServerError(detail) => {
                tracing::error!("Internal Server Error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

/// Converts body-extraction failures: a payload with the wrong shape is
/// unprocessable, anything else (bad syntax, wrong content type) is a
/// bad request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AppError::Unprocessable(err.to_string()),
            other => AppError::BadRequest(other.to_string()),
        }
    }
}

/// A query string that does not fit the schema is malformed input.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.to_string())
    }
}

/// A path parameter that does not parse addresses no resource.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.to_string())
    }
}
