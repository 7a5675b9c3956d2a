use std::sync::Arc;

use movies_core::catalog::Catalog;
use movies_core::review::ReviewSource;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. The catalog and reviews are built once at startup and
/// never mutated, so handlers read them without locking.
#[derive(Clone)]
pub struct AppState {
    /// Immutable movie catalog.
    pub catalog: Arc<Catalog>,
    /// Review collaborator consulted by the detail view.
    pub reviews: Arc<dyn ReviewSource>,
}
