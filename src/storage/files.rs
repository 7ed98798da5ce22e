//! Filesystem article store
//!
//! Layout of the output directory:
//!
//! ```text
//! assets/
//! ├── 1_raw.txt
//! ├── 1_meta.json
//! ├── 2_raw.txt
//! ├── 2_meta.json
//! └── run.json
//! ```

use crate::article::ArticleRecord;
use crate::storage::traits::{ArticleStore, StorageResult};
use crate::storage::RunManifest;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the run manifest inside the output directory
pub const MANIFEST_FILE: &str = "run.json";

/// Writes each article as a raw text file plus a JSON metadata file
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn raw_path(&self, id: u32) -> PathBuf {
        self.root.join(format!("{}_raw.txt", id))
    }

    pub fn meta_path(&self, id: u32) -> PathBuf {
        self.root.join(format!("{}_meta.json", id))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }
}

impl ArticleStore for FileStore {
    /// Removes the output directory if it exists and recreates it empty
    fn prepare(&mut self) -> StorageResult<()> {
        if self.root.exists() {
            tracing::debug!("Clearing output directory {}", self.root.display());
            fs::remove_dir_all(&self.root)?;
        }
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    fn save(&mut self, article: &ArticleRecord) -> StorageResult<()> {
        fs::write(self.raw_path(article.id), &article.text)?;

        let meta = serde_json::to_string_pretty(&article.meta())?;
        fs::write(self.meta_path(article.id), meta)?;

        tracing::debug!("Saved article {} to {}", article.id, self.root.display());
        Ok(())
    }

    fn finish(&mut self, manifest: &RunManifest) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(manifest)?;
        fs::write(self.manifest_path(), json)?;
        Ok(())
    }
}
