//! Run manifest
//!
//! One manifest is written per run. It ties an output directory to the
//! configuration that produced it and lists what was saved and what was skipped.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Status of a harvest run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Completed,
    Failed,
}

/// An article that was dropped under the skip policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedArticle {
    pub url: String,
    pub reason: String,
}

/// Record of one harvest run
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub status: RunStatus,
    pub config_hash: String,
    pub seed_urls: Vec<String>,
    pub max_articles: usize,
    pub collected_urls: Vec<String>,
    pub saved_ids: Vec<u32>,
    pub skipped: Vec<SkippedArticle>,
    pub error: Option<String>,
}

impl RunManifest {
    /// Starts a manifest for a run beginning now
    pub fn start(config_hash: &str, seed_urls: &[String], max_articles: usize) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            status: RunStatus::Running,
            config_hash: config_hash.to_string(),
            seed_urls: seed_urls.to_vec(),
            max_articles,
            collected_urls: Vec::new(),
            saved_ids: Vec::new(),
            skipped: Vec::new(),
            error: None,
        }
    }

    pub fn complete(&mut self) {
        self.finished_at = Some(Utc::now());
        self.status = RunStatus::Completed;
    }

    pub fn fail(&mut self, error: impl ToString) {
        self.finished_at = Some(Utc::now());
        self.status = RunStatus::Failed;
        self.error = Some(error.to_string());
    }

    /// Wall-clock duration of the run, if it has finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}
