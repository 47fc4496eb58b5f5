//! Engine errors: precondition and persistence failures.

use thiserror::Error;
use verlog_store::StoreError;

/// Errors returned by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The operation requires a prior `init`.
    #[error("not initialized; run `verlog init` first")]
    NotInitialized,

    /// `init` was asked to overwrite existing state.
    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    /// The snapshot mirror directory is gone; nothing safe can be
    /// checkpointed against it.
    #[error("snapshot mirror missing; reinitialize with `verlog init`")]
    SnapshotMissing,

    /// The atomic snapshot replacement did not commit.
    #[error("snapshot replacement failed: {0}")]
    SnapshotSwap(String),

    /// Persistence failure in one of the stores.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
