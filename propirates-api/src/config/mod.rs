use service_core::config as core_config;
use service_core::error::AppError;
use service_core::middleware::cors::AllowedOrigins;
use std::env;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub common: core_config::Config,
    pub cors_origins: AllowedOrigins,
    pub log_level: String,
    /// When set, traces are exported over OTLP in addition to stdout.
    pub otlp_endpoint: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            cors_origins: AllowedOrigins::Any,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            otlp_endpoint: None,
        }
    }
}

impl ApiConfig {
    /// Read configuration once at startup. `.env` is loaded by the core config.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(ApiConfig {
            common,
            cors_origins: AllowedOrigins::parse(env::var("CORS_ORIGINS").ok().as_deref()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            otlp_endpoint: env::var("OTLP_ENDPOINT")
                .ok()
                .filter(|endpoint| !endpoint.trim().is_empty()),
        })
    }
}
