//! News-Harvest main entry point
//!
//! This is the command-line interface for the News-Harvest article harvester.

use anyhow::Context;
use clap::Parser;
use news_harvest::config::{load_config_with_hash, Config};
use news_harvest::crawler::{harvest, Coordinator};
use news_harvest::storage::{validate_dataset, RunManifest};
use std::path::Path;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// News-Harvest: a single-site news article harvester
///
/// News-Harvest discovers article links on the configured seed pages and saves
/// the text and metadata of each article to the output directory.
#[derive(Parser, Debug)]
#[command(name = "news-harvest")]
#[command(version)]
#[command(about = "A single-site news article harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be harvested without fetching anything
    #[arg(long, conflicts_with_all = ["list_urls", "check_output"])]
    dry_run: bool,

    /// Collect article URLs, print them and exit without extracting
    #[arg(long, conflicts_with_all = ["dry_run", "check_output"])]
    list_urls: bool,

    /// Check the existing output directory for consistency and exit
    #[arg(long)]
    check_output: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.check_output {
        handle_check_output(Path::new(&config.output.assets_path))?;
    } else if cli.list_urls {
        handle_list_urls(config, &config_hash).await?;
    } else {
        handle_harvest(config, &config_hash).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("news_harvest=info,warn"),
            1 => EnvFilter::new("news_harvest=debug,info"),
            2 => EnvFilter::new("news_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the validated plan
fn handle_dry_run(config: &Config) {
    println!("=== News-Harvest Dry Run ===\n");

    println!("Articles to find and parse: {}", config.total_articles_to_find_and_parse);
    println!("On article error: {:?}", config.on_article_error);

    println!("\nSeed URLs ({}):", config.seed_urls.len());
    for seed in &config.seed_urls {
        println!("  - {}", seed);
    }

    println!("\nSite:");
    println!("  Origin: {}", config.site.origin);
    println!("  Teaser: {} -> {}", config.site.teaser, config.site.teaser_link);
    println!("  Body: {}", config.site.body);
    println!("  Headline: {}", config.site.headline);
    println!("  Author: {}", config.site.author);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!(
        "  Timeouts: {}s request, {}s connect",
        config.http.timeout_secs, config.http.connect_timeout_secs
    );

    println!("\nOutput: {} (cleared before each run)", config.output.assets_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the --list-urls mode: runs discovery only
async fn handle_list_urls(config: Config, config_hash: &str) -> anyhow::Result<()> {
    let coordinator = Coordinator::new(config, config_hash)?;
    let urls = coordinator
        .collect_urls()
        .await
        .context("Article discovery failed")?;

    for url in &urls {
        println!("{}", url);
    }

    Ok(())
}

/// Handles the --check-output mode: validates a previous run's output
fn handle_check_output(assets_path: &Path) -> anyhow::Result<()> {
    let count = validate_dataset(assets_path)
        .with_context(|| format!("Output check failed for {}", assets_path.display()))?;

    println!("✓ {} contains {} consistent article(s)", assets_path.display(), count);
    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(config: Config, config_hash: &str) -> anyhow::Result<()> {
    let assets_path = config.output.assets_path.clone();

    match harvest(config, config_hash).await {
        Ok(manifest) => {
            print_summary(&manifest, &assets_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e).context("Harvest failed")
        }
    }
}

fn print_summary(manifest: &RunManifest, assets_path: &str) {
    println!("=== Harvest Summary ===\n");
    println!("  URLs collected: {}", manifest.collected_urls.len());
    println!("  Articles saved: {}", manifest.saved_ids.len());
    println!("  Articles skipped: {}", manifest.skipped.len());
    for skipped in &manifest.skipped {
        println!("    * {} ({})", skipped.url, skipped.reason);
    }
    if let Some(duration) = manifest.duration_seconds() {
        println!("  Duration: {}s", duration);
    }
    println!("\n✓ Output written to: {}", assets_path);
}
