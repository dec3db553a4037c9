//! HTTP error mapping.
//!
//! Handlers return [`AppError`]; its [`IntoResponse`] impl turns every
//! variant into a `{ "error": ..., "code": ... }` JSON body with the right
//! status. Internal failures are logged server-side and sanitized before
//! they reach a client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chitrashala_core::error::CatalogError;
use serde::Serialize;

/// Error type returned by every handler in this crate.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain rule violation from `chitrashala_core`.
    #[error(transparent)]
    Core(#[from] CatalogError),

    /// A sqlx failure. Classified into 404/409/500 at response time.
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request (bad multipart body, unparseable field).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Anything that should never happen in normal operation.
    #[error("internal: {0}")]
    InternalError(String),
}

/// Convenience alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// The JSON body every error response carries.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

const SANITIZED: &str = "An internal error occurred";

impl AppError {
    /// Status, machine-readable code, and client-facing message for this error.
    ///
    /// Messages from [`CatalogError`] are written to be client-safe and pass
    /// through verbatim; internal and database failures are logged here and
    /// replaced with a generic message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CatalogError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CatalogError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Core(CatalogError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "CONFLICT", msg.clone())
            }
            AppError::Core(CatalogError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            AppError::Core(CatalogError::Forbidden(msg)) => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone())
            }
            AppError::Core(CatalogError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    SANITIZED.to_string(),
                )
            }
            AppError::Database(err) => db_parts(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    SANITIZED.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let body = ErrorBody {
            error: message,
            code,
        };
        (status, Json(body)).into_response()
    }
}

/// Map a sqlx error onto a response.
///
/// `RowNotFound` becomes 404. A unique violation (Postgres 23505) on one of
/// our `uq_` constraints becomes 409. Everything else is a sanitized 500.
fn db_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            if let Some(constraint) = db_err.constraint().filter(|c| c.starts_with("uq_")) {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        SANITIZED.to_string(),
    )
}
