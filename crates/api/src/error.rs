use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use paddock_core::error::CoreError;
use paddock_db::error::QueryError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`QueryError`] and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A filter rejected while translating the request.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A catalog read failure from `paddock_db`.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

// Extractor rejections become `BadRequest` so every error body has the same
// `{"error", "code"}` shape.

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Query(err) => classify_query_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::InvalidFilter(msg) => (StatusCode::BAD_REQUEST, "INVALID_FILTER", msg.clone()),
    }
}

/// Classify a catalog read failure into an HTTP status, error code, and message.
///
/// - Invalid filters map to 400 with the validation message.
/// - An uninitialised catalog maps to 503.
/// - Query deadlines map to 504.
/// - Store and decode failures map to 500 with a sanitized message.
fn classify_query_error(err: &QueryError) -> (StatusCode, &'static str, String) {
    match err {
        QueryError::InvalidFilter(core) => classify_core_error(core),
        QueryError::NotReady => (
            StatusCode::SERVICE_UNAVAILABLE,
            "NOT_READY",
            "Catalog is not ready yet".to_string(),
        ),
        QueryError::Timeout(_) => (
            StatusCode::GATEWAY_TIMEOUT,
            "TIMEOUT",
            "Catalog query timed out".to_string(),
        ),
        QueryError::Execution(source) => {
            tracing::error!(error = %source, "Catalog query failed");
            internal_error()
        }
        QueryError::Scan { row_index, source } => {
            tracing::error!(row_index, error = %source, "Catalog row could not be decoded");
            internal_error()
        }
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
