//! Error types for memory-bank indexing.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for scanning notes and writing the index.
///
/// Every variant is fatal for a run: no partial index is written.
#[derive(Error, Debug)]
pub enum IndexError {
    /// A note file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable note.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A note file is not valid UTF-8.
    #[error("Note is not valid UTF-8: {path}")]
    Encoding {
        /// Path of the offending note.
        path: PathBuf,
    },

    /// Directory enumeration failed.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The index file could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Records could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IndexError>;
