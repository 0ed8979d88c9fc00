//! Query interface over route data.
//!
//! The HTTP layer only talks to this trait, so the backing store could be
//! swapped for something other than the in-memory provider.

use crate::models::types::*;

// ============================================================================
// Provider Trait
// ============================================================================

/// Read-only lookups over a loaded route dataset
pub trait RouteProvider: Send + Sync {
    // ---- Collections ----

    /// Every route, in document order
    fn all_routes(&self) -> &[Route];

    /// Popular locations exactly as they were loaded
    fn popular_locations(&self) -> &[PopularLocation];

    // ---- Lookups ----

    /// First route whose code equals `code`, ignoring case
    fn route_by_code(&self, code: &str) -> Result<&Route>;

    /// Routes with at least one stop containing `query`, ignoring case
    ///
    /// A missing or empty query is rejected with [`TransitError::MissingQuery`].
    fn search_by_stop(&self, query: Option<&str>) -> Result<Vec<&Route>>;
}
