//! The movie record as stored in the bundled data file.
//!
//! Field names on disk (and on the wire) are part of the external contract:
//! `id`, `movieName`, `director`, `year`, `genre`, `description`,
//! `duration`, `imdbRating`. Every field is required.

use serde::{Deserialize, Serialize};

use crate::types::MovieId;

/// A single immutable catalog entry. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(rename = "movieName")]
    pub name: String,
    pub director: String,
    pub year: i32,
    /// Free-form; several genres may be joined with `/` (e.g. `Crime/Drama`).
    pub genre: String,
    pub description: String,
    #[serde(rename = "duration")]
    pub duration_minutes: i32,
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}
