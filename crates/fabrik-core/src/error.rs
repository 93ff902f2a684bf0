//! Error types for the fabrik-core library.
//!
//! Extraction and matching are total: an unrecognized layout, a malformed
//! numeric field, or a name with no catalog match are all ordinary results,
//! not errors. The only fallible seam is loading catalog entries through a
//! [`CatalogSource`](crate::models::catalog::CatalogSource) implementation.

use thiserror::Error;

/// Errors produced by catalog source implementations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Underlying store could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be decoded from the backing store.
    #[error("malformed catalog record: {0}")]
    Malformed(String),

    /// The backing store itself is unusable (missing file, bad schema).
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for catalog loading.
pub type Result<T> = std::result::Result<T, CatalogError>;
