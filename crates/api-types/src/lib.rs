//! Wire types for the CDO Jeepney Guide HTTP API.
//!
//! Route payloads are the `jeepney-transit` documents themselves; this crate
//! only carries the envelopes the server builds around them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SERVICE_NAME: &str = "CDO Jeepney Guide API";
pub const TAGLINE: &str = "Wag ka mawala sa sariling bayan.";

/// Body of every non-2xx response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// `GET /api/health`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_owned(),
            message: format!("{SERVICE_NAME} is running!"),
        }
    }
}

/// Query string of `GET /api/search`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `GET /`, a short self-description of the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiIndex {
    pub name: String,
    pub version: String,
    pub tagline: String,
    /// "METHOD path" -> description, in listing order
    pub endpoints: Map<String, Value>,
}

impl ApiIndex {
    pub fn new(version: impl Into<String>) -> Self {
        let endpoints = [
            ("GET /api/routes", "Get all jeepney routes"),
            ("GET /api/routes/:code", "Get route by code"),
            ("GET /api/search?q=location", "Search routes by location"),
            ("GET /api/health", "Health check"),
        ]
        .into_iter()
        .map(|(endpoint, about)| (endpoint.to_owned(), Value::from(about)))
        .collect();

        Self {
            name: SERVICE_NAME.to_owned(),
            version: version.into(),
            tagline: TAGLINE.to_owned(),
            endpoints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_body() {
        let body = serde_json::to_value(HealthResponse::default()).unwrap();
        assert_eq!(
            body,
            json!({"status": "ok", "message": "CDO Jeepney Guide API is running!"})
        );
    }

    #[test]
    fn test_error_body() {
        let body = serde_json::to_string(&ErrorResponse::new("Route not found")).unwrap();
        assert_eq!(body, r#"{"error":"Route not found"}"#);
    }

    #[test]
    fn test_index_endpoints_keep_order() {
        let index = ApiIndex::new("1.0.0");
        let keys: Vec<&str> = index.endpoints.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "GET /api/routes",
                "GET /api/routes/:code",
                "GET /api/search?q=location",
                "GET /api/health",
            ]
        );
        assert_eq!(index.tagline, TAGLINE);
    }

    #[test]
    fn test_search_params_optional() {
        let params: SearchParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.q, None);
    }
}
