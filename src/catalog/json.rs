//! JSON file catalog source.
//!
//! Reads the static catalog document from disk. A failed read is the
//! equivalent of a non-success response ([`CarteleraError::FetchFailed`]); a
//! body that does not parse is [`CarteleraError::ParseFailed`].

use crate::domain::error::{CarteleraError, Result};
use crate::domain::{Catalog, MediaEntry};
use crate::catalog::source::CatalogSource;
use std::path::{Path, PathBuf};

/// Catalog source backed by a JSON file.
///
/// The file is read on every fetch; nothing is kept between calls.
///
/// # File Format
///
/// ```json
/// {
///   "total": 1,
///   "entries": [
///     {
///       "title": "Wolf Creek",
///       "programType": "movie",
///       "images": { "Poster Art": { "url": "https://..." } },
///       "releaseYear": 2005
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    file_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl CatalogSource for JsonFileSource {
    fn fetch_entries(&mut self) -> Result<Vec<MediaEntry>> {
        let _span = tracing::debug_span!("json_fetch_entries", path = ?self.file_path).entered();

        let contents = std::fs::read(&self.file_path).map_err(|e| {
            tracing::debug!(error = %e, "catalog read failed");
            CarteleraError::FetchFailed(format!("{}: {e}", self.file_path.display()))
        })?;

        tracing::trace!(bytes = contents.len(), "catalog read");

        let catalog = Catalog::from_slice(&contents)?;

        tracing::debug!(
            entry_count = catalog.entries.len(),
            declared_total = ?catalog.total,
            "catalog parsed"
        );

        Ok(catalog.entries)
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_entries_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"entries": [{{"title": "Heat", "programType": "movie", "releaseYear": 1995, "images": {{}}}}]}}"#
        )
        .unwrap();

        let mut source = JsonFileSource::new(file.path());
        let entries = source.fetch_entries().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Heat");
    }

    #[test]
    fn missing_file_is_a_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = JsonFileSource::new(dir.path().join("absent.json"));

        let err = source.fetch_entries().unwrap_err();

        assert!(matches!(err, CarteleraError::FetchFailed(_)));
    }

    #[test]
    fn malformed_body_is_a_parse_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"entries\": [").unwrap();

        let mut source = JsonFileSource::new(file.path());
        let err = source.fetch_entries().unwrap_err();

        assert!(matches!(err, CarteleraError::ParseFailed(_)));
    }

    #[test]
    fn non_utf8_body_is_a_parse_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xff\xfe{\"entries\": []}").unwrap();

        let mut source = JsonFileSource::new(file.path());
        let err = source.fetch_entries().unwrap_err();

        assert!(matches!(err, CarteleraError::ParseFailed(_)));
    }
}
