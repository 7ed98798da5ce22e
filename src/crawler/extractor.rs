//! Article extraction
//!
//! Fetches one article page and fills an [`ArticleRecord`] in two phases: the
//! body text, which is required, and the headline/author metadata, which is
//! best-effort.

use crate::article::ArticleRecord;
use crate::crawler::site::{element_text, SiteProfile};
use crate::crawler::PageFetcher;
use crate::{ExtractionError, HarvestError};
use scraper::Html;

/// Extracts article records from article pages
pub struct ArticleExtractor<'a, F> {
    fetcher: &'a F,
    site: &'a SiteProfile,
}

impl<'a, F: PageFetcher> ArticleExtractor<'a, F> {
    pub fn new(fetcher: &'a F, site: &'a SiteProfile) -> Self {
        Self { fetcher, site }
    }

    /// Fetches and extracts a single article
    ///
    /// # Arguments
    ///
    /// * `article_url` - Absolute URL of the article page
    /// * `article_id` - Caller-assigned sequence id
    ///
    /// # Returns
    ///
    /// * `Ok(ArticleRecord)` - Record with `id` and `url` set from the arguments
    /// * `Err(HarvestError::Fetch)` - The page could not be retrieved
    /// * `Err(HarvestError::Extraction)` - The page has no article body
    pub async fn extract(
        &self,
        article_url: &str,
        article_id: u32,
    ) -> Result<ArticleRecord, HarvestError> {
        let html = self.fetcher.fetch(article_url).await?;
        let article = self.parse(article_url, article_id, &html)?;

        tracing::debug!(
            "Extracted article {} from {} ({} chars, title: {:?})",
            article.id,
            article.url,
            article.text.len(),
            article.title
        );

        Ok(article)
    }

    /// Extracts a record from already fetched HTML
    pub fn parse(
        &self,
        article_url: &str,
        article_id: u32,
        html: &str,
    ) -> Result<ArticleRecord, ExtractionError> {
        let document = Html::parse_document(html);
        let mut article = ArticleRecord::new(article_url, article_id);

        self.fill_text(&document, &mut article)?;
        self.fill_meta(&document, &mut article);

        Ok(article)
    }

    fn fill_text(&self, document: &Html, article: &mut ArticleRecord) -> Result<(), ExtractionError> {
        let body = document
            .select(&self.site.body)
            .next()
            .ok_or_else(|| ExtractionError::MissingBody {
                url: article.url.clone(),
            })?;

        article.text = element_text(body);
        Ok(())
    }

    fn fill_meta(&self, document: &Html, article: &mut ArticleRecord) {
        match document.select(&self.site.headline).next() {
            Some(headline) => article.title = element_text(headline),
            None => tracing::debug!("No headline on {}", article.url),
        }

        match document.select(&self.site.author).next() {
            Some(author) => article.author = element_text(author),
            None => tracing::debug!("No author on {}", article.url),
        }
    }
}
