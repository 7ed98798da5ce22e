//! Output directory consistency check
//!
//! A finished output directory is consistent when:
//! - every article has one `{id}_raw.txt` and one `{id}_meta.json`
//! - no text file is empty
//! - every text file name starts with a positive numeric id
//! - ids run from 1 without gaps
//!
//! The run manifest and any other non-text files are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons an output directory fails validation
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Output directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Output path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Output directory contains no articles: {}", .0.display())]
    Empty(PathBuf),

    #[error("Found {raw} raw text file(s) but {meta} metadata file(s)")]
    CountMismatch { raw: usize, meta: usize },

    #[error("Text file is empty: {}", .0.display())]
    EmptyText(PathBuf),

    #[error("Text file name does not start with a positive id: {}", .0.display())]
    BadFileName(PathBuf),

    #[error("Article ids must start at 1 and be contiguous: expected {expected}, found {found}")]
    NonContiguousIds { expected: u32, found: u32 },

    #[error("Failed to read output directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Checks that an output directory holds a consistent set of articles
///
/// # Returns
///
/// * `Ok(usize)` - Number of articles in the directory
/// * `Err(DatasetError)` - The first inconsistency found
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use news_harvest::storage::validate_dataset;
///
/// let count = validate_dataset(Path::new("tmp/articles")).unwrap();
/// println!("{} article(s)", count);
/// ```
pub fn validate_dataset(root: &Path) -> Result<usize, DatasetError> {
    if !root.exists() {
        return Err(DatasetError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(DatasetError::NotADirectory(root.to_path_buf()));
    }

    let mut raw_count = 0;
    let mut meta_count = 0;
    let mut ids = Vec::new();

    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        let name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        if name.ends_with("_raw.txt") {
            raw_count += 1;
        } else if name.ends_with("_meta.json") {
            meta_count += 1;
        }

        if !name.ends_with(".txt") {
            continue;
        }

        if fs::metadata(&path)?.len() == 0 {
            return Err(DatasetError::EmptyText(path));
        }

        match leading_id(&name) {
            Some(id) if id >= 1 => ids.push(id),
            _ => return Err(DatasetError::BadFileName(path)),
        }
    }

    if raw_count != meta_count {
        return Err(DatasetError::CountMismatch {
            raw: raw_count,
            meta: meta_count,
        });
    }

    if ids.is_empty() {
        return Err(DatasetError::Empty(root.to_path_buf()));
    }

    ids.sort_unstable();
    for (expected, &found) in (1..).zip(&ids) {
        if found != expected {
            return Err(DatasetError::NonContiguousIds { expected, found });
        }
    }

    tracing::debug!("Validated {} article(s) in {}", ids.len(), root.display());
    Ok(ids.len())
}

/// Parses the run of digits at the start of a file name
fn leading_id(name: &str) -> Option<u32> {
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    name[..digits].parse().ok()
}
