//! Movie catalog domain logic.
//!
//! Holds the immutable [`catalog::Catalog`], the conjunctive search over it,
//! and the read-only review store. Nothing here performs network I/O; the
//! HTTP layer lives in `movies-api`.

pub mod catalog;
pub mod error;
pub mod movie;
pub mod review;
pub mod search;
pub mod types;
