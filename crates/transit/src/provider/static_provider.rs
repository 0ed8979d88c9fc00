//! In-memory route provider backed by a loaded dataset.
//!
//! All queries are linear scans over the route list. Lookups never mutate
//! the dataset, so a single provider can serve any number of callers.

use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{traits::*, types::*};

// ============================================================================
// Static Provider
// ============================================================================

/// In-memory route provider
///
/// This type is cheap to clone since the dataset is stored in an `Arc`.
#[derive(Clone, Debug, Default)]
pub struct StaticRouteProvider {
    dataset: Arc<Dataset>,
}

impl StaticRouteProvider {
    /// Build provider from a loaded dataset
    pub fn from_dataset(dataset: Dataset) -> Self {
        let mut seen = HashSet::new();
        for route in &dataset.routes {
            if !seen.insert(route.code().to_lowercase()) {
                tracing::warn!(
                    code = %route.code(),
                    "duplicate route code, only the first is reachable by code"
                );
            }
        }

        Self {
            dataset: Arc::new(dataset),
        }
    }
}

impl RouteProvider for StaticRouteProvider {
    fn all_routes(&self) -> &[Route] {
        &self.dataset.routes
    }

    fn popular_locations(&self) -> &[PopularLocation] {
        &self.dataset.popular_locations
    }

    fn route_by_code(&self, code: &str) -> Result<&Route> {
        self.dataset
            .routes
            .iter()
            .find(|route| route.code().matches(code))
            .ok_or_else(|| TransitError::RouteNotFound(code.to_owned()))
    }

    fn search_by_stop(&self, query: Option<&str>) -> Result<Vec<&Route>> {
        let query = match query {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return Err(TransitError::MissingQuery),
        };

        let results: Vec<&Route> = self
            .dataset
            .routes
            .iter()
            .filter(|route| route.serves(&query))
            .collect();

        tracing::debug!(query = %query, matches = results.len(), "stop search");
        Ok(results)
    }
}
