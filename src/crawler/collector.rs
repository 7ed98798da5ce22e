//! Article URL discovery
//!
//! Walks the seed pages in order and gathers teaser links until the article cap
//! is reached.

use crate::crawler::site::SiteProfile;
use crate::crawler::PageFetcher;
use crate::{ExtractionError, FetchError};
use scraper::{ElementRef, Html};

/// Collects absolute article URLs from seed pages
pub struct UrlCollector<'a, F> {
    fetcher: &'a F,
    site: &'a SiteProfile,
}

impl<'a, F: PageFetcher> UrlCollector<'a, F> {
    pub fn new(fetcher: &'a F, site: &'a SiteProfile) -> Self {
        Self { fetcher, site }
    }

    /// Collects up to `max_articles` article URLs
    ///
    /// URLs keep document order within a seed page and seed order across pages.
    /// No deduplication happens. Once the cap is reached the remaining seed pages
    /// are not fetched.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - At most `max_articles` absolute URLs
    /// * `Err(FetchError)` - A seed page could not be retrieved; the whole collection is abandoned
    pub async fn collect(
        &self,
        seed_urls: &[String],
        max_articles: usize,
    ) -> Result<Vec<String>, FetchError> {
        let mut urls = Vec::new();

        for (index, seed_url) in seed_urls.iter().enumerate() {
            if urls.len() >= max_articles {
                tracing::debug!(
                    "Article cap of {} reached, skipping {} remaining seed page(s)",
                    max_articles,
                    seed_urls.len() - index
                );
                break;
            }

            let html = self.fetcher.fetch(seed_url).await?;
            let before = urls.len();

            if let Err(e) = self.scan_seed_page(seed_url, &html, &mut urls, max_articles) {
                tracing::warn!("{}; skipping the rest of this seed page", e);
            }

            tracing::debug!(
                "Seed page {} yielded {} article URL(s)",
                seed_url,
                urls.len() - before
            );
        }

        tracing::info!(
            "Collected {} article URL(s) from {} seed page(s)",
            urls.len(),
            seed_urls.len()
        );

        Ok(urls)
    }

    /// Appends the teaser links of one seed page, respecting the cap
    ///
    /// Stops at the first malformed teaser; URLs appended before it are kept.
    fn scan_seed_page(
        &self,
        seed_url: &str,
        html: &str,
        urls: &mut Vec<String>,
        max_articles: usize,
    ) -> Result<(), ExtractionError> {
        let document = Html::parse_document(html);

        for (position, teaser) in document.select(&self.site.teaser).enumerate() {
            if urls.len() >= max_articles {
                break;
            }

            let url = self
                .teaser_url(teaser)
                .map_err(|reason| ExtractionError::MalformedTeaser {
                    seed_url: seed_url.to_string(),
                    position,
                    reason: reason.to_string(),
                })?;

            urls.push(url);
        }

        Ok(())
    }

    fn teaser_url(&self, teaser: ElementRef<'_>) -> Result<String, &'static str> {
        let anchor = teaser
            .select(&self.site.teaser_link)
            .next()
            .ok_or("no link element")?;
        let href = anchor.value().attr("href").ok_or("link has no href")?;
        self.site
            .resolve_href(href)
            .ok_or("href cannot be resolved to an absolute URL")
    }
}
