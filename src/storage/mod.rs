//! Storage module for persisting harvested articles
//!
//! This module handles:
//! - Preparing the output location for a fresh run
//! - Writing article text and metadata
//! - Writing the run manifest
//! - Checking a finished output directory for consistency

mod dataset;
mod files;
mod manifest;
mod traits;

pub use dataset::{validate_dataset, DatasetError};
pub use files::{FileStore, MANIFEST_FILE};
pub use manifest::{RunManifest, RunStatus, SkippedArticle};
pub use traits::{ArticleStore, StorageError, StorageResult};
