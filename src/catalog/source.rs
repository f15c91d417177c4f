//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where
//! the catalog document comes from. The worker only depends on this trait, so
//! the transport can change without touching the load state machine.

use crate::domain::error::Result;
use crate::domain::MediaEntry;

/// A readable catalog resource.
///
/// One call to [`fetch_entries`](CatalogSource::fetch_entries) is one fetch:
/// implementations must not cache between calls.
///
/// # Implementations
///
/// - [`JsonFileSource`](super::JsonFileSource): reads a JSON document from disk (default)
/// - [`StaticSource`]: serves entries held in memory
///
/// # Examples
///
/// ```no_run
/// use cartelera::catalog::{CatalogSource, JsonFileSource};
///
/// let mut source = JsonFileSource::new("data/sample.json");
/// let entries = source.fetch_entries()?;
/// # Ok::<(), cartelera::CarteleraError>(())
/// ```
pub trait CatalogSource: Send {
    /// Reads the resource and returns its `entries`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchFailed`](crate::CarteleraError::FetchFailed) if the
    /// resource cannot be read and [`ParseFailed`](crate::CarteleraError::ParseFailed)
    /// if its body is not a catalog document.
    fn fetch_entries(&mut self) -> Result<Vec<MediaEntry>>;

    /// Human-readable location of the resource, for logs.
    fn describe(&self) -> String;
}

/// In-memory catalog source.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: Vec<MediaEntry>,
}

impl StaticSource {
    #[must_use]
    pub const fn new(entries: Vec<MediaEntry>) -> Self {
        Self { entries }
    }
}

impl CatalogSource for StaticSource {
    fn fetch_entries(&mut self) -> Result<Vec<MediaEntry>> {
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        format!("static({} entries)", self.entries.len())
    }
}
