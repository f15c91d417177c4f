//! JSON-lines span exporter.
//!
//! Each finished span becomes one JSON object on its own line:
//!
//! ```json
//! {"service":"cartelera","traceId":"…","spanId":"…","parentSpanId":"…",
//!  "name":"handle_event","startUnixNano":"…","durationMicros":42,
//!  "attributes":{"event_type":"NextPage"},"status":"unset"}
//! ```

use super::file_writer::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

struct JsonLinesExporter {
    file: RotatingFile,
    service: String,
    stopped: bool,
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("file", &self.file)
            .field("service", &self.service)
            .field("stopped", &self.stopped)
            .finish()
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        other => json!(other.to_string()),
    }
}

fn attributes(pairs: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = pairs
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

/// Encodes one span as a JSON object.
fn span_to_json(span: &SpanData, service: &str) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        JsonValue::Null
    } else {
        json!(format!("{:016x}", span.parent_span_id))
    };

    let status = match &span.status {
        Status::Unset => json!("unset"),
        Status::Ok => json!("ok"),
        Status::Error { description } => json!({ "error": description.to_string() }),
    };

    let duration = span
        .end_time
        .duration_since(span.start_time)
        .unwrap_or(Duration::ZERO);

    json!({
        "service": service,
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "startUnixNano": unix_nanos(span.start_time),
        "durationMicros": u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
        "attributes": attributes(&span.attributes),
        "status": status,
    })
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.stopped {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        let result = batch.iter().try_for_each(|span| {
            self.file
                .write_line(&span_to_json(span, &self.service).to_string())
        });

        Box::pin(std::future::ready(
            result.map_err(|e| TraceError::from(e.to_string())),
        ))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }
}

/// Builds a tracer provider that exports every finished span to `file`.
pub fn create_tracer_provider(file: RotatingFile, service: &str) -> TracerProvider {
    let exporter = JsonLinesExporter {
        file,
        service: service.to_string(),
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(
            opentelemetry_sdk::trace::Config::default()
                .with_resource(Resource::new(vec![KeyValue::new("service.name", service.to_string())])),
        )
        .with_simple_exporter(exporter)
        .build()
}
