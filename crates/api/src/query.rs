//! Shared query parameter types for API handlers.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

use movies_core::search::SearchCriteria;
use movies_core::types::MovieId;

/// Movie search parameters (`?name=&id=&genre=`), shared by the listing
/// view and the JSON search endpoint.
///
/// Values are kept exactly as received; filter activation is decided by
/// [`SearchCriteria`]. An empty `id=` counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct MovieSearchParams {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<MovieId>,
    pub genre: Option<String>,
}

impl From<MovieSearchParams> for SearchCriteria {
    fn from(params: MovieSearchParams) -> Self {
        SearchCriteria {
            name: params.name,
            id: params.id,
            genre: params.genre,
        }
    }
}

fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}
