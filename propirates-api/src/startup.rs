//! Router construction and server lifecycle.
//!
//! `build_router` is the single application object: the standalone binary
//! serves it over TCP and the serverless entrypoints hand it to the function
//! runtime.

use crate::config::ApiConfig;
use crate::handlers;
use crate::models::{HealthStatus, LogEntry, LogResponse, Pong};
use axum::{
    http::Uri,
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    cors::cors_layer,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Propirates API", version = "0.1.0"),
    paths(
        handlers::health::health_check,
        handlers::health::api_health_check,
        handlers::health::ping,
        handlers::logging::ingest_logs,
    ),
    components(schemas(HealthStatus, Pong, LogEntry, LogResponse)),
    tags(
        (name = "Observability", description = "Service health"),
        (name = "Logging", description = "Client log ingestion"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}

pub fn build_router(config: &ApiConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/health", get(handlers::api_health_check))
        .route("/api/ping", get(handlers::ping))
        .route("/api/logging", post(handlers::ingest_logs))
        .route("/openapi.json", get(openapi_json))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(cors_layer(&config.cors_origins))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Bind the listener and build the router. Port 0 picks a random port.
    pub async fn build(config: ApiConfig) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Propirates API listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(&config),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl-C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
