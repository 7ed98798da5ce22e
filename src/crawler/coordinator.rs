//! Harvest coordinator - main run orchestration logic
//!
//! This module drives one harvest run:
//! - Preparing the article store
//! - Collecting article URLs from the seed pages
//! - Extracting each article in turn and saving it
//! - Applying the per-article error policy
//! - Writing the run manifest

use crate::config::{ArticleErrorPolicy, Config};
use crate::crawler::{ArticleExtractor, HttpFetcher, PageFetcher, SiteProfile, UrlCollector};
use crate::storage::{ArticleStore, FileStore, RunManifest, SkippedArticle};
use crate::HarvestError;

/// Main harvest coordinator structure
pub struct Coordinator<F = HttpFetcher, S = FileStore> {
    config: Config,
    config_hash: String,
    site: SiteProfile,
    fetcher: F,
    store: S,
}

impl Coordinator {
    /// Creates a coordinator with the HTTP fetcher and the filesystem store
    ///
    /// # Arguments
    ///
    /// * `config` - The validated configuration
    /// * `config_hash` - Hash of the configuration file, recorded in the manifest
    pub fn new(config: Config, config_hash: impl Into<String>) -> Result<Self, HarvestError> {
        let fetcher = HttpFetcher::new(&config.http)?;
        let store = FileStore::new(&config.output.assets_path);
        Self::with_parts(config, config_hash, fetcher, store)
    }
}

impl<F: PageFetcher, S: ArticleStore> Coordinator<F, S> {
    /// Creates a coordinator from explicit collaborators
    pub fn with_parts(
        config: Config,
        config_hash: impl Into<String>,
        fetcher: F,
        store: S,
    ) -> Result<Self, HarvestError> {
        let site = SiteProfile::from_config(&config.site)?;

        Ok(Self {
            config,
            config_hash: config_hash.into(),
            site,
            fetcher,
            store,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs only the discovery stage
    pub async fn collect_urls(&self) -> Result<Vec<String>, HarvestError> {
        let collector = UrlCollector::new(&self.fetcher, &self.site);
        let urls = collector
            .collect(
                &self.config.seed_urls,
                self.config.total_articles_to_find_and_parse,
            )
            .await?;
        Ok(urls)
    }

    /// Runs a complete harvest
    ///
    /// The manifest is written whether the run completes or fails; a failure is
    /// still returned to the caller afterwards.
    ///
    /// # Returns
    ///
    /// * `Ok(RunManifest)` - The run completed
    /// * `Err(HarvestError)` - Collection failed, or an article failed under the abort policy
    pub async fn run(&mut self) -> Result<RunManifest, HarvestError> {
        self.store.prepare()?;

        let mut manifest = RunManifest::start(
            &self.config_hash,
            &self.config.seed_urls,
            self.config.total_articles_to_find_and_parse,
        );

        tracing::info!(
            "Starting harvest of up to {} article(s) from {} seed page(s)",
            self.config.total_articles_to_find_and_parse,
            self.config.seed_urls.len()
        );

        match self.harvest(&mut manifest).await {
            Ok(()) => {
                manifest.complete();
                self.store.finish(&manifest)?;
                tracing::info!(
                    "Harvest completed: {} saved, {} skipped",
                    manifest.saved_ids.len(),
                    manifest.skipped.len()
                );
                Ok(manifest)
            }
            Err(e) => {
                manifest.fail(&e);
                if let Err(store_err) = self.store.finish(&manifest) {
                    tracing::error!("Failed to write run manifest: {}", store_err);
                }
                Err(e)
            }
        }
    }

    async fn harvest(&mut self, manifest: &mut RunManifest) -> Result<(), HarvestError> {
        manifest.collected_urls = self.collect_urls().await?;

        let extractor = ArticleExtractor::new(&self.fetcher, &self.site);
        let mut next_id: u32 = 1;

        for url in &manifest.collected_urls {
            match extractor.extract(url, next_id).await {
                Ok(article) => {
                    self.store.save(&article)?;
                    manifest.saved_ids.push(article.id);
                    next_id += 1;
                }
                Err(e) => match self.config.on_article_error {
                    ArticleErrorPolicy::Abort => return Err(e),
                    ArticleErrorPolicy::Skip => {
                        tracing::warn!("Skipping {}: {}", url, e);
                        manifest.skipped.push(SkippedArticle {
                            url: url.clone(),
                            reason: e.to_string(),
                        });
                    }
                },
            }
        }

        Ok(())
    }
}
