use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use tracing_subscriber::{
    EnvFilter, filter::Directive, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Build a filter from `directives`, then add every `always_on` directive on
/// top so those targets cannot be silenced by a stricter level.
pub fn env_filter(directives: &str, always_on: &[&str]) -> EnvFilter {
    always_on
        .iter()
        .fold(EnvFilter::new(directives), |filter, directive| {
            match directive.parse::<Directive>() {
                Ok(directive) => filter.add_directive(directive),
                Err(e) => {
                    eprintln!("Ignoring invalid log directive '{}': {}", directive, e);
                    filter
                }
            }
        })
}

/// Install the global subscriber: env-filter, JSON lines on stdout and, when an
/// endpoint is given, OTLP trace export.
///
/// `RUST_LOG` wins over `log_level` when set; `always_on` applies either way.
pub fn init_tracing(
    service_name: &str,
    log_level: &str,
    always_on: &[&str],
    otlp_endpoint: Option<&str>,
) {
    let directives =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| log_level.to_string());
    let filter = env_filter(&directives, always_on);

    let telemetry = otlp_endpoint
        .and_then(|endpoint| otlp_tracer(service_name, endpoint))
        .map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer));

    tracing_subscriber::registry()
        .with(filter)
        .with(telemetry)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .init();
}

fn otlp_tracer(service_name: &str, otlp_endpoint: &str) -> Option<sdktrace::Tracer> {
    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(otlp_endpoint);

    match opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(runtime::Tokio)
    {
        Ok(tracer) => Some(tracer),
        Err(e) => {
            // The subscriber is not installed yet, so stderr is the only sink.
            eprintln!(
                "Failed to initialize OTLP tracer for service '{}' at endpoint '{}': {}. Continuing without trace export.",
                service_name, otlp_endpoint, e
            );
            None
        }
    }
}
