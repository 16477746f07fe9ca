pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod startup;

/// Name reported to the tracing backend.
pub const SERVICE_NAME: &str = "propirates-api";
