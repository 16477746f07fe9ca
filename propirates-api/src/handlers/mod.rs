pub mod health;
pub mod logging;

pub use health::{api_health_check, health_check, ping};
pub use logging::ingest_logs;
