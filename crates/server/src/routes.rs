use std::sync::Arc;

use api_types::{ApiIndex, HealthResponse, SearchParams};
use axum::{Json, Router};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use jeepney_transit::RouteProvider;
use tower_http::cors::{Any, CorsLayer};

use crate::error::ApiError;

/// Route data shared by every handler
pub type SharedProvider = Arc<dyn RouteProvider>;

pub fn create_router(provider: SharedProvider) -> Router {
    let router: Router<SharedProvider> = Router::new().route("/", get(index));

    [
        ("/api/routes", get(list_routes)),
        ("/api/routes/{code}", get(route_by_code)),
        ("/api/search", get(search)),
        ("/api/popular-locations", get(popular_locations)),
        ("/api/health", get(health)),
    ]
    .into_iter()
    // a trailing slash reaches the same handler
    .fold(router, |router, (path, handler)| {
        router
            .route(path, handler.clone())
            .route(&format!("{path}/"), handler)
    })
    .fallback(not_found)
    .method_not_allowed_fallback(method_not_allowed)
    .layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .with_state(provider)
}

async fn index() -> Json<ApiIndex> {
    Json(ApiIndex::new(env!("CARGO_PKG_VERSION")))
}

async fn list_routes(State(provider): State<SharedProvider>) -> Response {
    Json(provider.all_routes()).into_response()
}

async fn route_by_code(
    State(provider): State<SharedProvider>,
    Path(code): Path<String>,
) -> Result<Response, ApiError> {
    let route = provider.route_by_code(&code)?;
    Ok(Json(route).into_response())
}

async fn search(
    State(provider): State<SharedProvider>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let routes = provider.search_by_stop(params.q.as_deref())?;
    Ok(Json(routes).into_response())
}

async fn popular_locations(State(provider): State<SharedProvider>) -> Response {
    Json(provider.popular_locations()).into_response()
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
