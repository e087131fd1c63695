use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors returned by document stores and history sinks.
pub enum StoreError {
    /// Backing store cannot be reached.
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    /// IO error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Documents directory is missing or not a directory.
    #[error("documents directory unavailable: {path}")]
    DirectoryUnavailable { path: PathBuf },
}

/// Convenience result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
