//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! thread and the background worker that reads the catalog. Requests carry a
//! [`TraceContext`] so that spans recorded on the worker thread join the trace
//! of the event that caused them.

use crate::app::modes::LoadFailure;
use crate::domain::MediaEntry;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as 32 hex digits.
    pub trace_id: String,

    /// Span ID of the sender as 16 hex digits.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry IDs of the current tracing span.
    ///
    /// Returns `None` when there is no valid span context, for example when
    /// tracing was not initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Requests sent from the main thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the catalog once and reply with its entries.
    LoadCatalog {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Creates a `LoadCatalog` request carrying the current trace context.
    #[must_use]
    pub fn load_catalog() -> Self {
        Self::LoadCatalog {
            trace_context: TraceContext::from_current(),
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context } => trace_context.as_ref(),
        }
    }
}

/// Replies sent from the worker back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// The catalog was read and parsed.
    CatalogLoaded {
        /// Entries in document order.
        entries: Vec<MediaEntry>,
    },

    /// The catalog could not be loaded.
    LoadFailed {
        failure: LoadFailure,
        /// Detailed cause, for logs only.
        message: String,
    },
}
