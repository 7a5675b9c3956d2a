use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of movies loaded at startup.
    pub movies: usize,
}

/// GET /health -- returns service health and catalog size.
///
/// An empty catalog means the data file failed to load, so the service is
/// reported as degraded rather than down.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let movies = state.catalog.len();
    let status = if movies > 0 { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        movies,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
