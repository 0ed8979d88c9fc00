//! Mapping of query failures onto HTTP responses.

use api_types::ErrorResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jeepney_transit::TransitError;

/// Every error a handler can return. Each variant maps to exactly one status
/// and a `{"error": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transit(#[from] TransitError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Transit(TransitError::RouteNotFound(_)) | Self::NotFound => StatusCode::NOT_FOUND,
            Self::Transit(TransitError::MissingQuery) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Client facing message; route codes are not echoed back
    pub fn message(&self) -> String {
        match self {
            Self::Transit(TransitError::RouteNotFound(_)) => "Route not found".to_owned(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status(), "{self}");
        (self.status(), Json(ErrorResponse::new(self.message()))).into_response()
    }
}
