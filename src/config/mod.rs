//! Configuration module for News-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use news_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Will parse up to {} articles", config.total_articles_to_find_and_parse);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ArticleErrorPolicy, Config, HttpConfig, OutputConfig, RawConfig, SiteConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};

pub use validation::{validate, MAX_ARTICLES};
