//! Error types for the document store
//!
//! `thiserror` for automatic `Display` and `Error` implementations; the
//! core crate's path and tree errors are forwarded transparently.

use pathtree_core::path::PathError;
use pathtree_core::tree::TreeError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the document store
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading or writing the backing file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backing file exists but does not hold valid JSON
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        /// The offending file
        path: PathBuf,
        /// The underlying decode error
        source: serde_json::Error,
    },

    /// The document could not be encoded as JSON text
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    /// Invalid dot-notation path
    #[error(transparent)]
    Path(#[from] PathError),

    /// A tree mutation was rejected
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Save was requested on a store with no backing file path
    #[error("document store has no backing file path")]
    NoPath,
}
