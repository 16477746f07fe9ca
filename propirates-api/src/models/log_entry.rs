use crate::error::LogIngestError;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use utoipa::ToSchema;

pub const DEFAULT_LEVEL: &str = "INFO";
pub const LOG_RECEIVED: &str = "Log received";

/// Current UTC time as RFC 3339 with microseconds, e.g. `2026-10-16T09:30:00.123456Z`.
pub fn utc_now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// A client-side log record. Lives for the duration of one request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Defaults to `INFO`.
    pub level: Option<String>,
    pub message: Option<String>,
    /// Defaults to the time the entry is written.
    pub timestamp: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub context: Option<Map<String, Value>>,
    pub correlation_id: Option<String>,
}

impl LogEntry {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LEVEL)
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    pub fn timestamp(&self) -> Cow<'_, str> {
        match self.timestamp.as_deref() {
            Some(ts) => Cow::Borrowed(ts),
            None => Cow::Owned(utc_now_iso()),
        }
    }

    /// The context map, or `None` when absent or empty.
    pub fn context(&self) -> Option<&Map<String, Value>> {
        self.context.as_ref().filter(|context| !context.is_empty())
    }
}

/// Parse a `/api/logging` body.
///
/// Accepts a single entry object or a batch `{"logs": [...]}`. An empty body
/// counts as `{}`.
pub fn parse_log_body(body: &[u8]) -> Result<Vec<LogEntry>, LogIngestError> {
    let value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(body).map_err(LogIngestError::InvalidJson)?
    };

    let mut object = match value {
        Value::Object(object) => object,
        other => return Err(LogIngestError::NotAnObject(json_kind(&other))),
    };

    match object.remove("logs") {
        Some(Value::Array(logs)) => logs
            .into_iter()
            .map(|log| serde_json::from_value(log).map_err(LogIngestError::InvalidEntry))
            .collect(),
        _ => serde_json::from_value(Value::Object(object))
            .map(|entry| vec![entry])
            .map_err(LogIngestError::InvalidEntry),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// In-band result of a log submission. Always sent with HTTP 200.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LogResponse {
    Ok { message: String, timestamp: String },
    Error { message: String },
}

impl LogResponse {
    pub fn received() -> Self {
        LogResponse::Ok {
            message: LOG_RECEIVED.to_string(),
            timestamp: utc_now_iso(),
        }
    }

    pub fn error(err: impl ToString) -> Self {
        LogResponse::Error {
            message: err.to_string(),
        }
    }
}
