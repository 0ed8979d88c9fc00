//! # jeepney-transit
//!
//! In-memory jeepney route data for the CDO Jeepney Guide.
//!
//! ## Features
//!
//! - **Load once**: the route document is read a single time at startup
//! - **Case-insensitive lookups**: route codes match regardless of case
//! - **Stop search**: substring matching over every route's stop list
//! - **Pass-through fields**: anything besides `code` and `stops` is kept verbatim
//!
//! ## Example
//!
//! ```
//! use jeepney_transit::prelude::*;
//!
//! let dataset = Dataset::from_slice(
//!     br#"{"routes": [{"code": "R1", "stops": ["Cogon", "Velez"]}]}"#,
//! )
//! .unwrap();
//!
//! let provider = StaticRouteProvider::from_dataset(dataset);
//!
//! assert_eq!(provider.route_by_code("r1").unwrap().code().as_str(), "R1");
//! assert_eq!(provider.search_by_stop(Some("velez")).unwrap().len(), 1);
//! ```

pub mod identifiers;
pub mod loader;
pub mod models;
pub mod provider;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::loader::{load, load_or_default};
    pub use crate::models::{traits::*, types::*};
    pub use crate::provider::static_provider::StaticRouteProvider;
}

pub use prelude::*;
