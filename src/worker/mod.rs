//! Background worker that loads the catalog.
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: Worker implementation and its thread

pub mod handler;
pub mod messages;

pub use handler::{CatalogWorker, WorkerHandle};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
