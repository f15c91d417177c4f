//! Error types for the catalog browser.
//!
//! This module defines the centralized error type [`CarteleraError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for catalog browser operations.
///
/// The two load failures, [`FetchFailed`](CarteleraError::FetchFailed) and
/// [`ParseFailed`](CarteleraError::ParseFailed), are the only ones that reach the
/// user, and both collapse into the same generic failure screen. The remaining
/// variants cover configuration, theming, and host plumbing.
///
/// # Examples
///
/// ```
/// use cartelera::CarteleraError;
///
/// fn validate_config() -> Result<(), CarteleraError> {
///     Err(CarteleraError::Config("results_per_page must be 5, 10 or 20".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CarteleraError {
    /// The catalog resource could not be read.
    ///
    /// The equivalent of a non-success response: missing file, permission
    /// denied, or any other failure before a body is available.
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// The catalog body was read but is not a valid catalog document.
    #[error("Parse failed: {0}")]
    ParseFailed(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for catalog browser operations.
pub type Result<T> = std::result::Result<T, CarteleraError>;
