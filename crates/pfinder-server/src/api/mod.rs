mod search;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use pfinder_rainforest::RainforestClient;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

pub const MISSING_QUERY_MESSAGE: &str = "Missing query param";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch from Rainforest API";

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<RainforestClient>,
}

/// Fixed-shape error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Failures surfaced by the proxy. The upstream cause is logged, never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyError {
    MissingQuery,
    Upstream,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ProxyError::MissingQuery => (StatusCode::BAD_REQUEST, MISSING_QUERY_MESSAGE),
            ProxyError::Upstream => (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE_MESSAGE),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    checked_at: DateTime<Utc>,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(search::search))
        .route("/api/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData {
        status: "ok",
        checked_at: Utc::now(),
    })
}
