//! Crawler module for article discovery and extraction
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching behind the [`PageFetcher`] seam
//! - The compiled site profile (origin and selectors)
//! - Bounded article URL collection from seed pages
//! - Two-phase article extraction
//! - Overall run coordination

mod collector;
mod coordinator;
mod extractor;
mod fetcher;
mod site;

#[cfg(test)]
pub(crate) mod test_support;

pub use collector::UrlCollector;
pub use coordinator::Coordinator;
pub use extractor::ArticleExtractor;
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use site::{element_text, SiteProfile};

use crate::config::Config;
use crate::storage::RunManifest;
use crate::HarvestError;

/// Runs a complete harvest with the HTTP fetcher and filesystem store
///
/// # Arguments
///
/// * `config` - The validated configuration
/// * `config_hash` - Hash of the configuration file
pub async fn harvest(config: Config, config_hash: &str) -> Result<RunManifest, HarvestError> {
    let mut coordinator = Coordinator::new(config, config_hash)?;
    coordinator.run().await
}
