//! Worker thread that reads the catalog off the main thread.
//!
//! The worker owns a [`CatalogSource`] and answers each [`WorkerMessage`]
//! with exactly one [`WorkerResponse`]. Errors never escape as panics: every
//! failure becomes [`WorkerResponse::LoadFailed`].

use crate::app::modes::LoadFailure;
use crate::catalog::CatalogSource;
use crate::domain::error::{CarteleraError, Result};
use crate::worker::{WorkerMessage, WorkerResponse};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

/// Catalog loading worker.
pub struct CatalogWorker {
    source: Box<dyn CatalogSource>,
}

impl std::fmt::Debug for CatalogWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogWorker")
            .field("source", &self.source.describe())
            .finish()
    }
}

impl CatalogWorker {
    #[must_use]
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Reads the catalog once.
    fn handle_load_catalog(&mut self) -> WorkerResponse {
        match self.source.fetch_entries() {
            Ok(entries) => {
                tracing::debug!(
                    source = %self.source.describe(),
                    entry_count = entries.len(),
                    "catalog read"
                );
                WorkerResponse::CatalogLoaded { entries }
            }
            Err(e) => {
                tracing::debug!(source = %self.source.describe(), error = %e, "catalog read failed");
                WorkerResponse::LoadFailed {
                    failure: LoadFailure::from_error(&e),
                    message: e.to_string(),
                }
            }
        }
    }

    /// Attaches the sender's trace context to the current thread.
    ///
    /// The returned guard must be held while the message is handled.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Processes one request and returns its reply.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { .. } => self.handle_load_catalog(),
        }
    }

    /// Moves the worker onto its own thread.
    ///
    /// Replies are passed to `on_response` on the worker thread. The thread
    /// exits once every [`WorkerHandle`] is dropped or `on_response` reports
    /// that the receiver is gone by returning `false`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the thread cannot be spawned.
    pub fn spawn<F>(mut self, on_response: F) -> Result<WorkerHandle>
    where
        F: Fn(WorkerResponse) -> bool + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<WorkerMessage>();

        let join = thread::Builder::new()
            .name("cartelera-worker".to_string())
            .spawn(move || {
                for message in receiver {
                    if !on_response(self.handle_message(message)) {
                        tracing::debug!("response receiver gone, stopping worker");
                        break;
                    }
                }
            })?;

        Ok(WorkerHandle { sender, join })
    }
}

/// Sending side of a spawned [`CatalogWorker`].
#[derive(Debug)]
pub struct WorkerHandle {
    sender: Sender<WorkerMessage>,
    join: JoinHandle<()>,
}

impl WorkerHandle {
    /// Queues a request for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`CarteleraError::Worker`] if the worker thread has stopped.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        self.sender
            .send(message)
            .map_err(|e| CarteleraError::Worker(format!("worker stopped: {e}")))
    }

    /// Closes the request channel and waits for the thread to finish.
    ///
    /// # Errors
    ///
    /// Returns [`CarteleraError::Worker`] if the worker thread panicked.
    pub fn shutdown(self) -> Result<()> {
        drop(self.sender);
        self.join
            .join()
            .map_err(|_| CarteleraError::Worker("worker thread panicked".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{JsonFileSource, StaticSource};
    use crate::domain::MediaEntry;
    use std::time::Duration;

    #[test]
    fn load_returns_entries() {
        let entries = vec![MediaEntry::movie("Heat", 1995)];
        let mut worker = CatalogWorker::new(Box::new(StaticSource::new(entries.clone())));

        let response = worker.handle_message(WorkerMessage::LoadCatalog { trace_context: None });

        assert_eq!(response, WorkerResponse::CatalogLoaded { entries });
    }

    #[test]
    fn missing_file_is_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));
        let mut worker = CatalogWorker::new(Box::new(source));

        let response = worker.handle_message(WorkerMessage::LoadCatalog { trace_context: None });

        assert!(matches!(
            response,
            WorkerResponse::LoadFailed { failure: LoadFailure::FetchFailed, .. }
        ));
    }

    #[test]
    fn invalid_trace_context_is_ignored() {
        let mut worker = CatalogWorker::new(Box::new(StaticSource::default()));
        let message = WorkerMessage::LoadCatalog {
            trace_context: Some(crate::worker::TraceContext {
                trace_id: "not-hex".to_string(),
                parent_span_id: "zz".to_string(),
            }),
        };

        let response = worker.handle_message(message);

        assert_eq!(response, WorkerResponse::CatalogLoaded { entries: vec![] });
    }

    #[test]
    fn spawned_worker_replies_over_channel() {
        let (tx, rx) = mpsc::channel();
        let worker = CatalogWorker::new(Box::new(StaticSource::new(vec![
            MediaEntry::movie("Alien", 1979),
        ])));

        let handle = worker.spawn(move |response| tx.send(response).is_ok()).unwrap();
        handle.post(WorkerMessage::load_catalog()).unwrap();

        let response = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(response, WorkerResponse::CatalogLoaded { ref entries } if entries.len() == 1));
        handle.shutdown().unwrap();
    }
}
