#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::state::AppState;
use movies_core::catalog::Catalog;
use movies_core::review::ReviewStore;

/// The three-movie catalog used across the integration tests.
pub const MOVIES_JSON: &str = r#"[
    {"id": 1, "movieName": "The Prison Escape", "director": "John Director",
     "year": 1994, "genre": "Drama", "description": "Test description",
     "duration": 142, "imdbRating": 5.0},
    {"id": 2, "movieName": "The Family Boss", "director": "Michael Filmmaker",
     "year": 1972, "genre": "Crime/Drama", "description": "Test description",
     "duration": 175, "imdbRating": 5.0},
    {"id": 3, "movieName": "The Masked Hero", "director": "Chris Moviemaker",
     "year": 2008, "genre": "Action/Crime", "description": "Test description",
     "duration": 152, "imdbRating": 5.0}
]"#;

pub const REVIEWS_JSON: &str = r#"[
    {"movieId": 1, "userName": "reel_fan", "rating": 5.0,
     "comment": "A classic.", "createdAt": "2024-03-01T10:00:00Z"},
    {"movieId": 1, "userName": "critic42", "rating": 4.5,
     "comment": "Holds up.", "createdAt": "2024-03-03T10:00:00Z"}
]"#;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        movies_path: "unused.json".into(),
        reviews_path: "unused.json".into(),
    }
}

/// Build the full application router over the fixture catalog.
pub fn build_test_app() -> Router {
    let catalog = Catalog::from_json(MOVIES_JSON).unwrap();
    build_test_app_with(catalog)
}

/// Build the full application router over an arbitrary catalog.
pub fn build_test_app_with(catalog: Catalog) -> Router {
    build_app_router(test_state(catalog), &test_config())
}

/// Application state over `catalog` and the fixture reviews.
pub fn test_state(catalog: Catalog) -> AppState {
    AppState {
        catalog: Arc::new(catalog),
        reviews: Arc::new(ReviewStore::from_json(REVIEWS_JSON).unwrap()),
    }
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
