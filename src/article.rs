//! Article record shared between the extractor and the storage layer

use serde::Serialize;

/// One extracted article
///
/// The `id` is assigned by the caller and is unique within a run. `title` and
/// `author` stay empty when the page does not carry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// Sequence id within the run, starting at 1
    pub id: u32,

    /// Absolute URL the article was fetched from
    pub url: String,

    /// Headline text
    pub title: String,

    /// Author byline text
    pub author: String,

    /// Body text
    pub text: String,
}

/// Metadata view of an article, without the body text
#[derive(Debug, Serialize)]
pub struct ArticleMeta<'a> {
    pub id: u32,
    pub url: &'a str,
    pub title: &'a str,
    pub author: &'a str,
}

impl ArticleRecord {
    /// Creates an empty record for the given URL and id
    pub fn new(url: impl Into<String>, id: u32) -> Self {
        Self {
            id,
            url: url.into(),
            title: String::new(),
            author: String::new(),
            text: String::new(),
        }
    }

    /// Returns the metadata portion of the record
    pub fn meta(&self) -> ArticleMeta<'_> {
        ArticleMeta {
            id: self.id,
            url: &self.url,
            title: &self.title,
            author: &self.author,
        }
    }
}
