use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Media store operation errors.
///
/// Read failures and parse failures are distinct variants so operators can
/// tell a disk problem from a corrupt file. Not-found is not an error at
/// this layer; lookups return `Option`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read media file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("media file {path} contains invalid JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write media file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
