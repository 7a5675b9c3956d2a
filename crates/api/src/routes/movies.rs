//! Route definitions for the movie catalog.

use axum::handler::Handler;
use axum::routing::{get, MethodRouter};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::search_panic_response;
use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes, mounted at the root.
///
/// ```text
/// GET /movies                 -> list_movies
/// GET /movies/search          -> search_movies_api
/// GET /movies/{id}/details    -> movie_details
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list_movies))
        .route("/movies/search", search_route(movies::search_movies_api))
        .route("/movies/{id}/details", get(movies::movie_details))
}

/// GET route for a JSON search handler. A panic inside the handler is
/// answered with the failed search envelope instead of the generic 500 body.
pub fn search_route<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).layer(CatchPanicLayer::custom(search_panic_response))
}
