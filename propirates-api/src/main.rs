use propirates_api::config::ApiConfig;
use propirates_api::handlers::logging::CLIENT_LOG_DIRECTIVE;
use propirates_api::startup::Application;
use propirates_api::SERVICE_NAME;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        SERVICE_NAME,
        &config.log_level,
        &[CLIENT_LOG_DIRECTIVE],
        config.otlp_endpoint.as_deref(),
    );

    tracing::info!(cors_origins = ?config.cors_origins, "Starting {}", SERVICE_NAME);

    let app = Application::build(config).await?;
    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
