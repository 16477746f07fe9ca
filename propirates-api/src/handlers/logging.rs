use crate::models::{parse_log_body, LogEntry, LogResponse};
use axum::{body::Bytes, Json};

/// Tracing target for records forwarded from clients.
pub const CLIENT_LOG_TARGET: &str = "client_log";

/// Filter directive that keeps client records regardless of `LOG_LEVEL`.
pub const CLIENT_LOG_DIRECTIVE: &str = "client_log=info";

/// Accept client log entries and write them to process output.
///
/// Always answers 200; extraction failures come back as `status: "error"`.
#[utoipa::path(
    post,
    path = "/api/logging",
    request_body(
        content = LogEntry,
        description = "A log entry, or a batch as {\"logs\": [...]}",
        content_type = "application/json"
    ),
    responses((status = 200, description = "Log received, or the reason it was not", body = LogResponse)),
    tag = "Logging"
)]
pub async fn ingest_logs(body: Bytes) -> Json<LogResponse> {
    match parse_log_body(&body) {
        Ok(entries) => {
            entries.iter().for_each(write_entry);
            Json(LogResponse::received())
        }
        Err(e) => {
            tracing::error!(target: CLIENT_LOG_TARGET, error = %e, "Error processing client log");
            Json(LogResponse::error(e))
        }
    }
}

fn write_entry(entry: &LogEntry) {
    tracing::info!(
        target: CLIENT_LOG_TARGET,
        correlation_id = entry.correlation_id.as_deref(),
        "[{}] {}: {}",
        entry.timestamp(),
        entry.level().to_uppercase(),
        entry.message()
    );

    if let Some(context) = entry.context() {
        let context = serde_json::Value::Object(context.clone());
        tracing::info!(
            target: CLIENT_LOG_TARGET,
            correlation_id = entry.correlation_id.as_deref(),
            "Context: {}",
            context
        );
    }
}
