//! Load state machine types.
//!
//! The catalog is loaded once per mount and both outcomes are terminal:
//!
//! ```text
//! Idle ──Mount──▶ Loading ──CatalogLoaded──▶ Ready
//!                    └─────LoadFailed──────▶ Failed(kind)
//! ```

use crate::domain::CarteleraError;
use std::fmt;

/// Why a catalog load failed.
///
/// Both kinds render the same generic failure message; the distinction only
/// shows up in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// The resource could not be read.
    FetchFailed,
    /// The resource was read but is not a catalog document.
    ParseFailed,
}

impl LoadFailure {
    /// Classifies an error raised while loading the catalog.
    ///
    /// Anything that is not a parse failure happened before a body was
    /// available and counts as a fetch failure.
    #[must_use]
    pub const fn from_error(error: &CarteleraError) -> Self {
        match error {
            CarteleraError::ParseFailed(_) => Self::ParseFailed,
            _ => Self::FetchFailed,
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailed => f.write_str("fetch failed"),
            Self::ParseFailed => f.write_str("parse failed"),
        }
    }
}

/// Progress of the one-shot catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Not mounted yet; renders as an empty catalog.
    #[default]
    Idle,
    /// Load requested, waiting for the worker.
    Loading,
    /// Entries are available.
    Ready,
    /// Load failed; no entries are shown.
    Failed(LoadFailure),
}

impl LoadState {
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}
