//! In-memory fetcher for unit tests

use crate::crawler::PageFetcher;
use crate::FetchError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves fixed HTML per URL and records every request
///
/// Unknown URLs fail with a 404 status error.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

/// Builds an index page with one teaser per href
pub fn index_page(hrefs: &[&str]) -> String {
    let teasers: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<div class="b_ear-title"><a href="{}">Story {}</a></div>"#,
                href, href
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", teasers)
}

/// Builds an article page; `None` leaves the element out
pub fn article_page(headline: Option<&str>, author: Option<&str>, body: Option<&str>) -> String {
    let mut html = String::from("<html><body>");
    if let Some(headline) = headline {
        html.push_str(&format!(r#"<div class="headline">{}</div>"#, headline));
    }
    if let Some(author) = author {
        html.push_str(&format!(r#"<div class="author">{}</div>"#, author));
    }
    if let Some(body) = body {
        html.push_str(&format!(r#"<div class="b_article-text">{}</div>"#, body));
    }
    html.push_str("</body></html>");
    html
}
