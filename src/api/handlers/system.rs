//! System endpoints: home banner, health check, unknown routes.

use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::HomeResponse;
use crate::app_state::AppState;
use crate::error::DirectoryError;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /`: Service banner.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Home",
    description = "Entry point of the directory; create and delete responses redirect here.",
    responses(
        (status = 200, description = "Service banner", body = HomeResponse),
    )
)]
pub async fn home_handler() -> impl IntoResponse {
    Json(HomeResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        links: vec![
            "/api/v1/venues".to_string(),
            "/api/v1/artists".to_string(),
            "/api/v1/shows".to_string(),
        ],
    })
}

/// `GET /health`: Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Fallback for paths no route matches.
pub async fn not_found_handler(uri: Uri) -> DirectoryError {
    tracing::debug!(path = %uri.path(), "no route");
    DirectoryError::RouteNotFound(uri.path().to_string())
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
}
