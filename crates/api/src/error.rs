use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use cinelog_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses,
/// with two deliberate exceptions: id-lookup misses return 404 with an empty
/// body, and validation failures return 422 with a structured violation list.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinelog-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                // Lookup misses carry no body at all.
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "resource not found");
                    return StatusCode::NOT_FOUND.into_response();
                }
                CoreError::Validation(violations) => {
                    let body = json!({
                        "error": "Validation failed",
                        "code": "VALIDATION_FAILED",
                        "violations": violations,
                    });
                    return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body))
                        .into_response();
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => match classify_sqlx_error(err) {
                Classified::NotFound => return StatusCode::NOT_FOUND.into_response(),
                Classified::Http(status, code, message) => (status, code, message),
            },

            // --- HTTP-specific errors ---
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

enum Classified {
    NotFound,
    Http(StatusCode, &'static str, String),
}

/// Classify a sqlx error into an HTTP response shape.
///
/// - `RowNotFound` maps to 404 (empty body).
/// - Unique constraint violations (PostgreSQL 23505) map to 409.
/// - Foreign key violations (23503) map to 409: the referenced parent row
///   disappeared between the handler's existence check and the write.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> Classified {
    match err {
        sqlx::Error::RowNotFound => Classified::NotFound,
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => Classified::Http(
                StatusCode::CONFLICT,
                "CONFLICT",
                "Duplicate value violates a unique constraint".to_string(),
            ),
            Some("23503") => Classified::Http(
                StatusCode::CONFLICT,
                "CONFLICT",
                "Referenced resource no longer exists".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                Classified::Http(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            Classified::Http(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
