//! Tracing subscriber initialization.

use super::file_writer::{RotatingFile, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "cartelera";
const TRACE_FILE: &str = "cartelera-otlp.json";

/// Installs the global subscriber that exports spans to the trace file.
///
/// `RUST_LOG` takes precedence over `config.trace_level`, which defaults to
/// `info`. Any failure (no data directory, a subscriber already installed)
/// leaves tracing disabled instead of failing the program.
///
/// Keep the returned provider alive for the whole session; dropping it
/// shuts the exporter down.
#[must_use]
pub fn init_tracing(config: &Config) -> Option<TracerProvider> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or("info"))
    });

    let data_dir = paths::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;

    let file = RotatingFile::new(data_dir.join(TRACE_FILE), DEFAULT_MAX_BYTES, DEFAULT_BACKUPS);
    let provider = tracer::create_tracer_provider(file, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .ok()?;

    Some(provider)
}
