//! Case bank error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the case bank.
#[derive(Debug, Error)]
pub enum CaseBankError {
    /// Stored vectors have a fixed dimension and a new entry did not match.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the vectors already in the index.
        expected: usize,
        /// Dimension of the rejected vector.
        actual: usize,
    },

    /// The snapshot on disk exists but could not be parsed.
    #[error("corrupt snapshot at {path}: {source}")]
    CorruptSnapshot {
        /// Snapshot file path.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot serialization failed.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Filesystem failure while reading or writing the snapshot.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The interior lock was poisoned by a panicking writer.
    #[error("case bank lock poisoned")]
    Poisoned,
}

/// Convenience alias used throughout this crate.
pub type CaseBankResult<T> = Result<T, CaseBankError>;
