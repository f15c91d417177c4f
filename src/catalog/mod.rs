//! Catalog loading and view derivation.
//!
//! # Modules
//!
//! - `source`: [`CatalogSource`] trait abstracting the catalog transport
//! - `json`: JSON file implementation of the source
//! - `collate`: Locale-aware title ordering
//! - `view`: Pure filter/sort/paginate derivation

pub mod collate;
pub mod json;
pub mod source;
pub mod view;

pub use collate::locale_compare;
pub use json::JsonFileSource;
pub use source::{CatalogSource, StaticSource};
pub use view::{derive, matches_year, numeric_value, CatalogView, ResultsPerPage};
