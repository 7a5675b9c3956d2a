use std::path::PathBuf;

use crate::types::MovieId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: MovieId },
}

/// Search criteria rejected by [`crate::search::SearchCriteria::require_specific`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    #[error("Movie id must be a positive number, got {0}")]
    NonPositiveId(MovieId),

    #[error("At least one search parameter is required")]
    Missing,
}

/// Failure while building a catalog (or review store) from its data file.
///
/// Any of these aborts the whole load; callers fall back to an empty store.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate movie id {0}")]
    DuplicateId(MovieId),
}
