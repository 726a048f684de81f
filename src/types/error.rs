//! Error types for the index.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, querying, or dumping an index.
#[derive(Error, Debug)]
pub enum IndexError {
    /// A collection or document file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A writer failed while the index was being dumped.
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    /// Attempted to insert a word that normalized to nothing.
    #[error("Cannot index an empty word")]
    EmptyKey,

    /// Runtime configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Result serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IndexError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
