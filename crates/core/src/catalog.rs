//! The movie catalog: an ordered, immutable list of movies plus an id index.
//!
//! A [`Catalog`] is built exactly once at startup and shared read-only
//! afterwards. Loading is total-or-nothing: if the data file is missing,
//! unreadable, or any record fails to parse, the whole load is abandoned
//! and [`Catalog::load`] hands back an empty catalog.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CatalogError;
use crate::movie::Movie;
use crate::types::MovieId;

/// Immutable collection of movies in data-file order.
///
/// `index` maps every movie id to its position in `movies` and is derived
/// solely from `movies` at construction time.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    index: HashMap<MovieId, usize>,
}

impl Catalog {
    /// An empty catalog, used when the data file cannot be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from movies in their source order.
    ///
    /// Fails with [`CatalogError::DuplicateId`] if two records share an id.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(movies.len());
        for (pos, movie) in movies.iter().enumerate() {
            if index.insert(movie.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(movie.id));
            }
        }
        Ok(Self { movies, index })
    }

    /// Parse a JSON array of movie objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Self::from_movies(movies)
    }

    /// Read and parse the data file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the catalog from `path`, falling back to an empty catalog.
    ///
    /// Load failures are logged and never surfaced to the caller.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    movies = catalog.len(),
                    "Movie catalog loaded",
                );
                catalog
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load movies, continuing with an empty catalog",
                );
                Self::empty()
            }
        }
    }

    /// Every movie, in source order.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by id.
    ///
    /// Returns `None` when `id` is absent, not positive, or unknown.
    pub fn get_by_id(&self, id: Option<MovieId>) -> Option<&Movie> {
        let id = id.filter(|id| *id > 0)?;
        self.index.get(&id).map(|&pos| &self.movies[pos])
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// Three-movie catalog shared by the unit tests in this crate.
#[cfg(test)]
pub(crate) fn sample_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            {"id": 1, "movieName": "The Prison Escape", "director": "John Director",
             "year": 1994, "genre": "Drama", "description": "Two imprisoned men bond.",
             "duration": 142, "imdbRating": 5.0},
            {"id": 2, "movieName": "The Family Boss", "director": "Michael Filmmaker",
             "year": 1972, "genre": "Crime/Drama", "description": "An aging patriarch.",
             "duration": 175, "imdbRating": 5.0},
            {"id": 3, "movieName": "The Masked Hero", "director": "Chris Moviemaker",
             "year": 2008, "genre": "Action/Crime", "description": "A vigilante rises.",
             "duration": 152, "imdbRating": 5.0}
        ]"#,
    )
    .unwrap()
}
