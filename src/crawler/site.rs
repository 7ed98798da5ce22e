//! Compiled site profile
//!
//! Turns the textual [`SiteConfig`] into parsed selectors and a base URL, and
//! provides the small element helpers the collector and extractor share.

use crate::config::SiteConfig;
use crate::ConfigError;
use scraper::{ElementRef, Selector};
use url::Url;

/// Origin and selectors for the one site a run targets
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub origin: Url,
    pub teaser: Selector,
    pub teaser_link: Selector,
    pub body: Selector,
    pub headline: Selector,
    pub author: Selector,
}

impl SiteProfile {
    /// Compiles a site configuration
    ///
    /// # Returns
    ///
    /// * `Ok(SiteProfile)` - Every selector parsed and the origin is an http(s) URL
    /// * `Err(ConfigError)` - The origin or one of the selectors is invalid
    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        let origin = Url::parse(&config.origin).map_err(|e| {
            ConfigError::Validation(format!("Invalid site origin '{}': {}", config.origin, e))
        })?;

        if origin.scheme() != "http" && origin.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Site origin '{}' must use http or https",
                config.origin
            )));
        }

        Ok(Self {
            origin,
            teaser: compile("teaser", &config.teaser)?,
            teaser_link: compile("teaser_link", &config.teaser_link)?,
            body: compile("body", &config.body)?,
            headline: compile("headline", &config.headline)?,
            author: compile("author", &config.author)?,
        })
    }

    /// Resolves a teaser href to an absolute URL
    ///
    /// Relative hrefs are joined onto the origin; absolute hrefs are returned as-is.
    /// Only http(s) results are accepted, so `mailto:`, `javascript:` and similar
    /// links resolve to `None`.
    pub fn resolve_href(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }

        let url = self.origin.join(href).ok()?;
        match url.scheme() {
            "http" | "https" => Some(url.to_string()),
            _ => None,
        }
    }
}

fn compile(name: &'static str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        name,
        message: format!("'{}': {:?}", selector, e),
    })
}

/// Returns the concatenated text of an element's subtree, trimmed
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
