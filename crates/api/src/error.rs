use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movies_core::error::{CoreError, CriteriaError};
use serde_json::json;

use crate::response::SearchEnvelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `movies_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
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

/// Failure of the JSON search endpoint.
///
/// Rendered with the same envelope as a successful search (`success: false`)
/// rather than the generic `{ error, code }` body.
#[derive(Debug, thiserror::Error)]
pub enum SearchRejection {
    /// The query string could not be decoded (e.g. a non-numeric id).
    #[error("Invalid query: {0}")]
    Query(String),

    /// Criteria were decodable but not acceptable for an API search.
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    /// A panic caught while serving the search.
    #[error("Search failed: {0}")]
    Internal(String),
}

impl IntoResponse for SearchRejection {
    fn into_response(self) -> Response {
        let (status, message, pirate_message) = match &self {
            SearchRejection::Query(detail) => (
                StatusCode::BAD_REQUEST,
                detail.clone(),
                "Blimey! That search be written in no tongue this crew can read!",
            ),
            SearchRejection::Criteria(CriteriaError::NonPositiveId(_)) => (
                StatusCode::BAD_REQUEST,
                "Arrr! Movie ID must be a positive number, matey!".to_string(),
                "That be no valid treasure map number!",
            ),
            SearchRejection::Criteria(CriteriaError::Missing) => (
                StatusCode::BAD_REQUEST,
                "Arrr! Ye need to provide at least one search parameter, ye scurvy dog!"
                    .to_string(),
                "Batten down the hatches! No search criteria provided!",
            ),
            SearchRejection::Internal(detail) => {
                tracing::error!(error = %detail, "Movie search failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while searching for movies".to_string(),
                    "Shiver me timbers! A kraken attacked our search! Try again later, ye brave soul!",
                )
            }
        };

        let body = SearchEnvelope::failure(message, pirate_message);
        (status, axum::Json(body)).into_response()
    }
}

/// Best-effort text of a caught panic payload.
pub fn panic_detail(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    }
}

/// Render a panic inside a JSON search handler as the 500 search envelope.
pub fn search_panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic_detail(&*err);
    SearchRejection::Internal(format!("handler panicked: {detail}")).into_response()
}
