//! News-Harvest: a single-site news article harvester
//!
//! This crate discovers article URLs on a news index page, extracts the body text and
//! metadata of each article, and writes every article to an output directory.

pub mod article;
pub mod config;
pub mod crawler;
pub mod storage;

use thiserror::Error;

/// Main error type for News-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("total_articles_to_find_and_parse must be a positive integer, got {0}")]
    IncorrectNumberOfArticles(String),

    #[error("total_articles_to_find_and_parse must be at most 100, got {0}")]
    NumberOfArticlesOutOfRange(i64),

    #[error("Incorrect seed URL: {0}")]
    IncorrectUrl(String),

    #[error("Invalid selector for {name}: {message}")]
    InvalidSelector { name: &'static str, message: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while retrieving a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Errors raised when a page lacks the structure the site profile expects
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Article body not found on {url}")]
    MissingBody { url: String },

    #[error("Malformed teaser #{position} on {seed_url}: {reason}")]
    MalformedTeaser {
        seed_url: String,
        position: usize,
        reason: String,
    },
}

/// Result type alias for News-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use article::ArticleRecord;
pub use config::Config;
pub use crawler::{ArticleExtractor, Coordinator, PageFetcher, SiteProfile, UrlCollector};
