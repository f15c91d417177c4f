//! Domain layer for the catalog browser.
//!
//! This module contains the catalog data model and the error type, independent
//! of how the catalog is read, how state is held, or how it is drawn.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Catalog document and media entry model
//!
//! # Examples
//!
//! ```
//! use cartelera::domain::{Catalog, Result};
//!
//! fn parse(json: &str) -> Result<Catalog> {
//!     Catalog::from_json(json)
//! }
//!
//! let catalog = parse(r#"{"entries": []}"#).unwrap();
//! assert!(catalog.entries.is_empty());
//! ```

pub mod entry;
pub mod error;

pub use entry::{Catalog, Image, MediaEntry, MOVIE_PROGRAM_TYPE, POSTER_ART_SLOT};
pub use error::{CarteleraError, Result};
