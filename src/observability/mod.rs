//! OpenTelemetry tracing with file export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK provider → JsonLinesExporter → rotated file
//! ```
//!
//! Spans land in `cartelera-otlp.json` under the data directory, one JSON
//! object per line, rotated at 5 MiB with two backups.

mod file_writer;
mod init;
mod tracer;

pub use init::init_tracing;
