//! Shared response envelope types for API handlers.
//!
//! The listing and detail views use a `{ "data": ... }` envelope. The JSON
//! search endpoint has its own envelope ([`SearchEnvelope`]) because its
//! field set is a published contract.

use serde::Serialize;
use serde_json::Value;

use movies_core::movie::Movie;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: listing }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body of every `/movies/search` response, successful or not.
///
/// `movies`, `total_results` and `search_criteria` are only present on
/// success.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEnvelope<'a> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<&'a Movie>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_results: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<SearchCriteriaEcho>,
    pub message: String,
    pub pirate_message: String,
}

impl SearchEnvelope<'_> {
    /// A failed search with no result fields.
    pub fn failure(message: impl Into<String>, pirate_message: impl Into<String>) -> Self {
        Self {
            success: false,
            movies: None,
            total_results: None,
            search_criteria: None,
            message: message.into(),
            pirate_message: pirate_message.into(),
        }
    }
}

/// Echo of the raw search inputs. Missing values are rendered as `""`;
/// a present id stays a number.
#[derive(Debug, Serialize)]
pub struct SearchCriteriaEcho {
    pub name: String,
    pub id: Value,
    pub genre: String,
}
