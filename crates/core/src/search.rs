//! Conjunctive movie search and genre enumeration.
//!
//! Each filter is optional and has an activation rule: the id filter is
//! active only for a positive id, the text filters only when non-blank
//! after trimming. Inactive filters never reduce the result set. Active
//! filters are AND-ed and the catalog order of survivors is preserved.
//!
//! Note the deliberate difference from [`Catalog::get_by_id`]: there a
//! non-positive id means "no movie", here it means "no id filter".
//!
//! [`Catalog::all_genres`] lists genre strings verbatim, so `Crime/Drama`
//! is one entry distinct from `Drama`, even though the genre filter matches
//! `Drama` against `Crime/Drama` by substring.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::error::CriteriaError;
use crate::movie::Movie;
use crate::types::MovieId;

/// Optional search filters as they arrive from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub id: Option<MovieId>,
    pub genre: Option<String>,
}

impl SearchCriteria {
    /// The id to filter on, if the id filter is active.
    pub fn active_id(&self) -> Option<MovieId> {
        self.id.filter(|id| *id > 0)
    }

    /// The trimmed name query, if the name filter is active.
    pub fn active_name(&self) -> Option<&str> {
        active_text(self.name.as_deref())
    }

    /// The trimmed genre query, if the genre filter is active.
    pub fn active_genre(&self) -> Option<&str> {
        active_text(self.genre.as_deref())
    }

    /// Whether at least one filter would participate in matching.
    pub fn is_active(&self) -> bool {
        self.active_id().is_some() || self.active_name().is_some() || self.active_genre().is_some()
    }

    /// Stricter check used by API callers that must name something to search for.
    ///
    /// An explicit non-positive id is an error here (it is merely inert in
    /// [`Catalog::search`]), and so is a request with no active filter.
    pub fn require_specific(&self) -> Result<(), CriteriaError> {
        if let Some(id) = self.id.filter(|id| *id <= 0) {
            return Err(CriteriaError::NonPositiveId(id));
        }
        if !self.is_active() {
            return Err(CriteriaError::Missing);
        }
        Ok(())
    }
}

fn active_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl Catalog {
    /// Movies satisfying every active filter in `criteria`, in catalog order.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Movie> {
        tracing::info!(
            name = ?criteria.name,
            id = ?criteria.id,
            genre = ?criteria.genre,
            "Searching movies",
        );

        let id = criteria.active_id();
        let name = criteria.active_name().map(str::to_lowercase);
        let genre = criteria.active_genre().map(str::to_lowercase);

        let results: Vec<&Movie> = self
            .all()
            .iter()
            .filter(|m| id.map_or(true, |id| m.id == id))
            .filter(|m| {
                name.as_deref()
                    .map_or(true, |q| contains_ignore_case(&m.name, q))
            })
            .filter(|m| {
                genre
                    .as_deref()
                    .map_or(true, |q| contains_ignore_case(&m.genre, q))
            })
            .collect();

        tracing::info!(results = results.len(), "Movie search complete");
        results
    }

    /// Distinct genre strings, verbatim, sorted ascending.
    pub fn all_genres(&self) -> Vec<&str> {
        self.all()
            .iter()
            .map(|m| m.genre.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
