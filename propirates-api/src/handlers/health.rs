use crate::models::{HealthStatus, Pong};
use axum::Json;

/// Root health check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthStatus)),
    tag = "Observability"
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

/// Health check under the `/api` prefix
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = HealthStatus)),
    tag = "Observability"
)]
pub async fn api_health_check() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

#[utoipa::path(
    get,
    path = "/api/ping",
    responses((status = 200, description = "Pong", body = Pong)),
    tag = "Observability"
)]
pub async fn ping() -> Json<Pong> {
    Json(Pong { pong: true })
}
