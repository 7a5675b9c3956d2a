//! Movie reviews shown on the detail view.
//!
//! Reviews are read-only, loaded once from a bundled JSON array with the
//! same total-or-nothing policy as the movie catalog.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{MovieId, Timestamp};

/// A single user review attached to a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub movie_id: MovieId,
    pub user_name: String,
    pub rating: f64,
    pub comment: String,
    pub created_at: Timestamp,
}

/// Anything able to produce the ordered reviews for a movie.
pub trait ReviewSource: Send + Sync {
    fn reviews_for(&self, movie_id: MovieId) -> Vec<Review>;
}

/// In-memory review store grouped by movie id, source order kept per movie.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    by_movie: HashMap<MovieId, Vec<Review>>,
}

impl ReviewStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let mut by_movie: HashMap<MovieId, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_movie.entry(review.movie_id).or_default().push(review);
        }
        Self { by_movie }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let reviews: Vec<Review> = serde_json::from_str(json)?;
        Ok(Self::from_reviews(reviews))
    }

    /// Load reviews from `path`, falling back to an empty store.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let result = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|json| Self::from_json(&json));

        match result {
            Ok(store) => {
                tracing::info!(
                    path = %path.display(),
                    reviews = store.len(),
                    "Reviews loaded",
                );
                store
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load reviews, detail views will show none",
                );
                Self::empty()
            }
        }
    }

    /// Total number of reviews across all movies.
    pub fn len(&self) -> usize {
        self.by_movie.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_movie.is_empty()
    }
}

impl ReviewSource for ReviewStore {
    fn reviews_for(&self, movie_id: MovieId) -> Vec<Review> {
        self.by_movie.get(&movie_id).cloned().unwrap_or_default()
    }
}
