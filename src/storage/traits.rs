//! Storage traits and error types
//!
//! This module defines the trait interface for article stores and associated
//! error types.

use crate::article::ArticleRecord;
use crate::storage::RunManifest;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for article store implementations
///
/// A store is prepared once per run, receives every extracted article, and is
/// finished with the run manifest, whether the run succeeded or not.
pub trait ArticleStore {
    /// Makes the store ready for a fresh run, discarding the previous run's output
    fn prepare(&mut self) -> StorageResult<()>;

    /// Persists one article
    fn save(&mut self, article: &ArticleRecord) -> StorageResult<()>;

    /// Records the manifest of the finished run
    fn finish(&mut self, manifest: &RunManifest) -> StorageResult<()>;
}
