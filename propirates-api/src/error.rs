use thiserror::Error;

/// Failures while turning a `/api/logging` body into log entries.
///
/// These never become HTTP errors; the handler reports them in-band.
#[derive(Debug, Error)]
pub enum LogIngestError {
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Invalid log entry: {0}")]
    InvalidEntry(#[source] serde_json::Error),
}
