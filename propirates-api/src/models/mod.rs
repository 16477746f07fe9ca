pub mod health;
pub mod log_entry;

pub use health::{HealthStatus, Pong};
pub use log_entry::{parse_log_body, LogEntry, LogResponse};
