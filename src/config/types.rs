use serde::Deserialize;

/// Configuration file as it appears on disk
///
/// `seed_urls` and `total_articles_to_find_and_parse` are kept untyped so that
/// validation can report a precise error for each kind of mistake.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    pub seed_urls: toml::Value,
    pub total_articles_to_find_and_parse: toml::Value,
    #[serde(default)]
    pub on_article_error: ArticleErrorPolicy,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Validated configuration for a harvest run
#[derive(Debug, Clone)]
pub struct Config {
    /// Index pages to discover articles on, in crawl order
    pub seed_urls: Vec<String>,

    /// Maximum number of articles to collect and parse
    pub total_articles_to_find_and_parse: usize,

    /// What to do when a single article cannot be fetched or parsed
    pub on_article_error: ArticleErrorPolicy,

    pub site: SiteConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Handling of per-article failures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleErrorPolicy {
    /// Stop the run at the first failing article
    #[default]
    Abort,

    /// Log the failure, record it in the manifest and move on
    Skip,
}

/// Markup coupling for the harvested site
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin that relative teaser links are resolved against
    pub origin: String,

    /// Selector for article teasers on a seed page
    pub teaser: String,

    /// Selector for the link inside a teaser
    pub teaser_link: String,

    /// Selector for the article body
    pub body: String,

    /// Selector for the headline
    pub headline: String,

    /// Selector for the author byline
    pub author: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://gazeta.ru".to_string(),
            teaser: "div.b_ear-title".to_string(),
            teaser_link: "a".to_string(),
            body: "div.b_article-text".to_string(),
            headline: "div.headline".to_string(),
            author: "div.author".to_string(),
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,

    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("news-harvest/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the articles are written to; wiped at the start of every run
    pub assets_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            assets_path: "tmp/articles".to_string(),
        }
    }
}
