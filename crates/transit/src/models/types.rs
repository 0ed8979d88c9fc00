//! Core data types for jeepney route data.

use std::path::PathBuf;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::identifiers::*;

// ============================================================================
// Data Structures
// ============================================================================

/// Entry surfaced verbatim for client-side suggestions (a string or a record)
pub type PopularLocation = Value;

/// A single jeepney route
///
/// Only `code` and `stops` are interpreted. The source object is kept whole
/// and written back out exactly as loaded, so fields like name, fare or
/// description keep their values and their position.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    code: RouteCode,
    stops: Vec<StopName>,
    document: Map<String, Value>,
}

impl Route {
    pub fn new(code: impl Into<RouteCode>, stops: impl IntoIterator<Item = impl Into<StopName>>) -> Self {
        let code = code.into();
        let stops: Vec<StopName> = stops.into_iter().map(Into::into).collect();

        let mut document = Map::new();
        document.insert("code".to_owned(), Value::from(code.as_str()));
        document.insert(
            "stops".to_owned(),
            stops.iter().map(|stop| Value::from(stop.as_str())).collect(),
        );

        Self {
            code,
            stops,
            document,
        }
    }

    /// Attach an opaque attribute
    #[cfg(test)]
    pub(crate) fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.document.insert(key.into(), value.into());
        self
    }

    pub fn code(&self) -> &RouteCode {
        &self.code
    }

    pub fn stops(&self) -> &[StopName] {
        &self.stops
    }

    /// Any field of the source object, interpreted or not
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Does any stop contain `needle` (already lowercased)?
    pub fn serves(&self, needle: &str) -> bool {
        self.stops.iter().any(|stop| stop.contains_lowercase(needle))
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.document.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let document = Map::<String, Value>::deserialize(deserializer)?;

        let code = match document.get("code") {
            Some(value) => RouteCode::deserialize(value).map_err(de::Error::custom)?,
            None => return Err(de::Error::missing_field("code")),
        };
        let stops = match document.get("stops") {
            Some(value) => Vec::<StopName>::deserialize(value).map_err(de::Error::custom)?,
            None => return Err(de::Error::missing_field("stops")),
        };

        Ok(Self {
            code,
            stops,
            document,
        })
    }
}

/// The whole route document, immutable once loaded
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub routes: Vec<Route>,
    #[serde(
        rename = "popularLocations",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub popular_locations: Vec<PopularLocation>,
}

impl Dataset {
    pub fn new(routes: Vec<Route>, popular_locations: Vec<PopularLocation>) -> Self {
        Self {
            routes,
            popular_locations,
        }
    }

    /// Parse a dataset from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.popular_locations.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<PopularLocation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PopularLocation>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by route queries
#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Search query required")]
    MissingQuery,
}

pub type Result<T> = std::result::Result<T, TransitError>;

/// Errors raised while loading the route document
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
