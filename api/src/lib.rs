//! Serverless entrypoints.
//!
//! Each deployment path convention gets its own function binary; all of them
//! serve the router from `propirates_api::startup::build_router`.

use lambda_http::{run, Error};
use propirates_api::config::ApiConfig;
use propirates_api::handlers::logging::CLIENT_LOG_DIRECTIVE;
use propirates_api::startup::build_router;
use propirates_api::SERVICE_NAME;
use service_core::observability::init_tracing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrypoint {
    /// Root index function.
    Index,
    /// Catch-all function for any `/api/*` path.
    CatchAll,
}

impl Entrypoint {
    pub fn function_name(&self) -> &'static str {
        match self {
            Entrypoint::Index => "index",
            Entrypoint::CatchAll => "catch-all",
        }
    }
}

/// Load configuration, install tracing and hand the router to the function runtime.
pub async fn serve(entrypoint: Entrypoint) -> Result<(), Error> {
    let config = ApiConfig::load()?;

    init_tracing(
        SERVICE_NAME,
        &config.log_level,
        &[CLIENT_LOG_DIRECTIVE],
        config.otlp_endpoint.as_deref(),
    );

    tracing::info!(
        function = entrypoint.function_name(),
        "Starting serverless entrypoint"
    );

    run(build_router(&config)).await
}
