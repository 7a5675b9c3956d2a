//! Tests for `AppError` / `SearchRejection` → HTTP response mapping.
//!
//! These call `IntoResponse` directly; no router is involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use movies_api::error::{search_panic_response, AppError, SearchRejection};
use movies_core::error::{CoreError, CriteriaError};

/// Helper: convert a response-producing error into status and parsed JSON body.
async fn error_to_response(err: impl IntoResponse) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Movie with id 42 not found");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret file path leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(
        !json.to_string().contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// SearchRejection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_criteria_returns_400_envelope() {
    let (status, json) = error_to_response(SearchRejection::from(CriteriaError::Missing)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("Arrr! Ye need to provide at least one search parameter"));
    assert!(json.get("movies").is_none());
}

#[tokio::test]
async fn non_positive_id_returns_400_envelope() {
    let err = SearchRejection::from(CriteriaError::NonPositiveId(-1));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("Arrr! Movie ID must be a positive number"));
}

#[tokio::test]
async fn internal_search_failure_returns_500_envelope_without_detail() {
    let err = SearchRejection::Internal("serializer exploded at offset 17".into());
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "An error occurred while searching for movies");
    assert!(!json.to_string().contains("offset 17"));
    assert!(json["pirateMessage"].is_string());
}

#[tokio::test]
async fn undecodable_query_returns_400_envelope_with_generic_pirate_message() {
    let err = SearchRejection::Query("Failed to deserialize query string".into());
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to deserialize query string");
    assert!(!json["pirateMessage"]
        .as_str()
        .unwrap()
        .contains("treasure map number"));
}

#[test]
fn criteria_errors_become_criteria_rejections() {
    assert_matches!(
        SearchRejection::from(CriteriaError::NonPositiveId(0)),
        SearchRejection::Criteria(CriteriaError::NonPositiveId(0))
    );
    assert_matches!(
        SearchRejection::from(CriteriaError::Missing),
        SearchRejection::Criteria(CriteriaError::Missing)
    );
}

#[tokio::test]
async fn search_panic_renders_500_envelope() {
    let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("index on fire"));
    let response = search_panic_response(payload);
    let (status, json) = error_to_response(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "An error occurred while searching for movies");
    assert!(!json.to_string().contains("index on fire"));
}
