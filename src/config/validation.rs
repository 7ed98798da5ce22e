use crate::config::types::{Config, HttpConfig, OutputConfig, RawConfig, SiteConfig};
use crate::crawler::SiteProfile;
use crate::ConfigError;

/// Upper bound for `total_articles_to_find_and_parse`
pub const MAX_ARTICLES: i64 = 100;

/// Validates a raw configuration and converts it into a typed [`Config`]
///
/// Checks run in a fixed order: article count type, seed list shape, article
/// count range, then each seed URL.
pub fn validate(raw: RawConfig) -> Result<Config, ConfigError> {
    let max_articles = validate_article_count(&raw.total_articles_to_find_and_parse)?;
    let seeds = validate_seed_list(&raw.seed_urls)?;

    if max_articles > MAX_ARTICLES {
        return Err(ConfigError::NumberOfArticlesOutOfRange(max_articles));
    }

    let seed_urls = validate_seed_urls(seeds)?;

    validate_site_config(&raw.site)?;
    validate_http_config(&raw.http)?;
    validate_output_config(&raw.output)?;

    Ok(Config {
        seed_urls,
        total_articles_to_find_and_parse: max_articles as usize,
        on_article_error: raw.on_article_error,
        site: raw.site,
        http: raw.http,
        output: raw.output,
    })
}

/// The count must be a positive integer
fn validate_article_count(value: &toml::Value) -> Result<i64, ConfigError> {
    match value {
        toml::Value::Integer(count) if *count > 0 => Ok(*count),
        other => Err(ConfigError::IncorrectNumberOfArticles(other.to_string())),
    }
}

/// The seed set must be a non-empty array
fn validate_seed_list(value: &toml::Value) -> Result<&[toml::Value], ConfigError> {
    match value {
        toml::Value::Array(seeds) if !seeds.is_empty() => Ok(seeds.as_slice()),
        toml::Value::Array(_) => Err(ConfigError::IncorrectUrl(
            "seed_urls cannot be empty".to_string(),
        )),
        other => Err(ConfigError::IncorrectUrl(format!(
            "seed_urls must be a list, got {}",
            other.type_str()
        ))),
    }
}

/// Every seed must be a string starting with `https://`
fn validate_seed_urls(seeds: &[toml::Value]) -> Result<Vec<String>, ConfigError> {
    seeds
        .iter()
        .map(|seed| match seed.as_str() {
            Some(url) if url.starts_with("https://") => Ok(url.to_string()),
            Some(url) => Err(ConfigError::IncorrectUrl(format!(
                "Seed URL '{}' must start with https://",
                url
            ))),
            None => Err(ConfigError::IncorrectUrl(format!(
                "Seed URL must be a string, got {}",
                seed
            ))),
        })
        .collect()
}

/// Origin and selectors must compile
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    SiteProfile::from_config(config).map(|_| ())
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.assets_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "assets_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
