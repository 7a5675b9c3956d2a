//! Handlers for the movie catalog: listing, detail and JSON search.
//!
//! The listing and detail handlers return view models (what a page template
//! would receive) in the `{ "data": ... }` envelope. The search handler
//! returns the [`SearchEnvelope`] contract and validates its inputs more
//! strictly than the listing does: an explicit non-positive id or an
//! entirely blank query is a 400 there, while the listing just ignores it.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use movies_core::error::CoreError;
use movies_core::movie::Movie;
use movies_core::review::Review;
use movies_core::search::SearchCriteria;
use movies_core::types::MovieId;

use crate::error::{AppError, AppResult, SearchRejection};
use crate::query::MovieSearchParams;
use crate::response::{DataResponse, SearchCriteriaEcho, SearchEnvelope};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// Everything the movie listing page displays.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListing<'a> {
    pub movies: Vec<&'a Movie>,
    pub all_genres: Vec<&'a str>,
    pub search_performed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_id: Option<MovieId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_genre: Option<String>,
    pub no_results: bool,
    pub pirate_message: String,
}

/// A single movie together with its reviews.
#[derive(Debug, Serialize)]
pub struct MovieDetails<'a> {
    pub movie: &'a Movie,
    pub reviews: Vec<Review>,
}

const BROWSE_MESSAGE: &str = "Welcome to our treasure chest of movies, ye landlubber!";
const NO_RESULTS_MESSAGE: &str =
    "Arrr! No treasure found in these waters, matey! Try adjustin' yer search criteria.";

fn listing_message(found: usize) -> String {
    format!("Ahoy! Found {found} pieces of cinematic treasure for ye!")
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /movies
///
/// Browse the whole catalog, or search it when any filter is active. The
/// raw parameters are handed to the search unchanged.
pub async fn list_movies(
    State(state): State<AppState>,
    query: Result<Query<MovieSearchParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let criteria = SearchCriteria::from(params);

    tracing::info!(
        name = ?criteria.name,
        id = ?criteria.id,
        genre = ?criteria.genre,
        "Listing movies",
    );

    let catalog = &state.catalog;
    let listing = if criteria.is_active() {
        let movies = catalog.search(&criteria);
        let no_results = movies.is_empty();
        let pirate_message = if no_results {
            NO_RESULTS_MESSAGE.to_string()
        } else {
            listing_message(movies.len())
        };
        MovieListing {
            movies,
            all_genres: catalog.all_genres(),
            search_performed: true,
            search_name: criteria.name,
            search_id: criteria.id,
            search_genre: criteria.genre,
            no_results,
            pirate_message,
        }
    } else {
        MovieListing {
            movies: catalog.all().iter().collect(),
            all_genres: catalog.all_genres(),
            search_performed: false,
            search_name: None,
            search_id: None,
            search_genre: None,
            no_results: false,
            pirate_message: BROWSE_MESSAGE.to_string(),
        }
    };

    Ok(Json(DataResponse { data: listing }).into_response())
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

/// GET /movies/{id}/details
///
/// A movie and its reviews, or 404 when the id does not name a movie.
pub async fn movie_details(
    State(state): State<AppState>,
    path: Result<Path<MovieId>, PathRejection>,
) -> AppResult<Response> {
    let Path(id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    tracing::info!(movie_id = id, "Fetching movie details");

    let Some(movie) = state.catalog.get_by_id(Some(id)) else {
        tracing::warn!(movie_id = id, "Movie not found");
        return Err(CoreError::NotFound {
            entity: "Movie",
            id,
        }
        .into());
    };

    let details = MovieDetails {
        movie,
        reviews: state.reviews.reviews_for(movie.id),
    };

    Ok(Json(DataResponse { data: details }).into_response())
}

// ---------------------------------------------------------------------------
// JSON search
// ---------------------------------------------------------------------------

/// GET /movies/search
///
/// JSON search API. Zero matches is still a success.
pub async fn search_movies_api(
    State(state): State<AppState>,
    query: Result<Query<MovieSearchParams>, QueryRejection>,
) -> Result<Response, SearchRejection> {
    let Query(params) = query.map_err(|e| SearchRejection::Query(e.body_text()))?;
    tracing::info!(
        name = ?params.name,
        id = ?params.id,
        genre = ?params.genre,
        "API search request",
    );

    let echo = SearchCriteriaEcho {
        name: params.name.clone().unwrap_or_default(),
        id: params.id.map_or_else(|| Value::String(String::new()), Value::from),
        genre: params.genre.clone().unwrap_or_default(),
    };

    let criteria = SearchCriteria::from(params);
    criteria.require_specific()?;

    let movies = state.catalog.search(&criteria);
    let total = movies.len();
    let (message, pirate_message) = if total == 0 {
        (
            "No movies found matching your search criteria".to_string(),
            "Arrr! No treasure found in these waters, matey! The sea be empty of yer desired films!"
                .to_string(),
        )
    } else {
        (
            format!("Found {total} movies"),
            format!("Ahoy! Discovered {total} pieces of cinematic treasure for ye, me hearty!"),
        )
    };

    let envelope = SearchEnvelope {
        success: true,
        movies: Some(movies),
        total_results: Some(total),
        search_criteria: Some(echo),
        message,
        pirate_message,
    };

    Ok(Json(envelope).into_response())
}
