//! Integration tests for the harvester
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full harvest cycle end-to-end through the real HTTP fetcher.

use news_harvest::config::{ArticleErrorPolicy, Config, HttpConfig, OutputConfig, SiteConfig};
use news_harvest::crawler::{ArticleExtractor, Coordinator, HttpFetcher, SiteProfile, UrlCollector};
use news_harvest::storage::{validate_dataset, FileStore, RunStatus};
use news_harvest::{ExtractionError, FetchError, HarvestError};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration targeting the mock server
fn create_test_config(
    origin: &str,
    seeds: Vec<String>,
    max_articles: usize,
    policy: ArticleErrorPolicy,
    assets_path: &Path,
) -> Config {
    Config {
        seed_urls: seeds,
        total_articles_to_find_and_parse: max_articles,
        on_article_error: policy,
        site: SiteConfig {
            origin: origin.to_string(),
            ..SiteConfig::default()
        },
        http: HttpConfig {
            user_agent: "TestHarvester/1.0".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        },
        output: OutputConfig {
            assets_path: assets_path.display().to_string(),
        },
    }
}

fn index_page(hrefs: &[&str]) -> String {
    let teasers: String = hrefs
        .iter()
        .map(|href| format!(r#"<div class="b_ear-title"><a href="{}">Story</a></div>"#, href))
        .collect();
    format!("<html><body><h2>Latest</h2>{}</body></html>", teasers)
}

fn article_page(headline: &str, author: &str, body: &str) -> String {
    format!(
        r#"<html><body>
        <div class="headline">{}</div>
        <div class="author">{}</div>
        <div class="b_article-text"><p>{}</p></div>
        </body></html>"#,
        headline, author, body
    )
}

async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_harvest_respects_cap() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let assets = TempDir::new().unwrap();

    mount_page(&mock_server, "/index", index_page(&["/a1", "/a2", "/a3"])).await;
    mount_page(
        &mock_server,
        "/a1",
        article_page("First headline", "Ann Author", "First body"),
    )
    .await;
    mount_page(
        &mock_server,
        "/a2",
        article_page("Second headline", "Bo Author", "Second body"),
    )
    .await;

    // Beyond the cap, must never be requested
    Mock::given(method("GET"))
        .and(path("/a3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(
        &base_url,
        vec![format!("{}/index", base_url)],
        2,
        ArticleErrorPolicy::Abort,
        assets.path(),
    );

    let mut coordinator = Coordinator::new(config, "test-hash").expect("Failed to create coordinator");
    let manifest = coordinator.run().await.expect("Harvest failed");

    assert_eq!(
        manifest.collected_urls,
        vec![format!("{}/a1", base_url), format!("{}/a2", base_url)]
    );
    assert_eq!(manifest.saved_ids, vec![1, 2]);
    assert_eq!(manifest.status, RunStatus::Completed);

    let store = FileStore::new(assets.path());
    assert_eq!(std::fs::read_to_string(store.raw_path(1)).unwrap(), "First body");
    assert_eq!(std::fs::read_to_string(store.raw_path(2)).unwrap(), "Second body");

    let meta: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.meta_path(2)).unwrap()).unwrap();
    assert_eq!(meta["id"], 2);
    assert_eq!(meta["url"], format!("{}/a2", base_url));
    assert_eq!(meta["title"], "Second headline");
    assert_eq!(meta["author"], "Bo Author");

    let run: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.manifest_path()).unwrap()).unwrap();
    assert_eq!(run["status"], "completed");
    assert_eq!(run["config_hash"], "test-hash");
}

#[tokio::test]
async fn test_collect_and_extract_scenario() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/index", index_page(&["/a1", "/a2", "/a3"])).await;
    mount_page(&mock_server, "/a1", article_page("One", "A", "Text one")).await;
    mount_page(&mock_server, "/a2", article_page("Two", "B", "Text two")).await;

    let site = SiteProfile::from_config(&SiteConfig {
        origin: base_url.clone(),
        ..SiteConfig::default()
    })
    .unwrap();
    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();

    let collector = UrlCollector::new(&fetcher, &site);
    let urls = collector
        .collect(&[format!("{}/index", base_url)], 2)
        .await
        .unwrap();
    assert_eq!(urls, vec![format!("{}/a1", base_url), format!("{}/a2", base_url)]);

    let extractor = ArticleExtractor::new(&fetcher, &site);
    for (index, url) in urls.iter().enumerate() {
        let id = index as u32 + 1;
        let article = extractor.extract(url, id).await.unwrap();
        assert_eq!(article.id, id);
        assert_eq!(&article.url, url);
        assert!(!article.text.is_empty());
    }
}

#[tokio::test]
async fn test_cap_reached_skips_later_seeds() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let assets = TempDir::new().unwrap();

    mount_page(&mock_server, "/index", index_page(&["/a1"])).await;
    mount_page(&mock_server, "/a1", article_page("One", "A", "Text one")).await;

    Mock::given(method("GET"))
        .and(path("/politics"))
        .respond_with(ResponseTemplate::new(200).set_body_string(index_page(&["/p1"])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(
        &base_url,
        vec![
            format!("{}/index", base_url),
            format!("{}/politics", base_url),
        ],
        1,
        ArticleErrorPolicy::Abort,
        assets.path(),
    );

    let mut coordinator = Coordinator::new(config, "test-hash").unwrap();
    let manifest = coordinator.run().await.unwrap();

    assert_eq!(manifest.saved_ids, vec![1]);
}

#[tokio::test]
async fn test_skip_policy_continues_past_server_error() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let assets = TempDir::new().unwrap();

    mount_page(&mock_server, "/index", index_page(&["/a1", "/a2", "/a3"])).await;
    mount_page(&mock_server, "/a1", article_page("One", "A", "Text one")).await;
    Mock::given(method("GET"))
        .and(path("/a2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/a3", article_page("Three", "C", "Text three")).await;

    let config = create_test_config(
        &base_url,
        vec![format!("{}/index", base_url)],
        3,
        ArticleErrorPolicy::Skip,
        assets.path(),
    );

    let mut coordinator = Coordinator::new(config, "test-hash").unwrap();
    let manifest = coordinator.run().await.unwrap();

    assert_eq!(manifest.saved_ids, vec![1, 2]);
    assert_eq!(manifest.skipped.len(), 1);
    assert_eq!(manifest.skipped[0].url, format!("{}/a2", base_url));

    let store = FileStore::new(assets.path());
    assert_eq!(std::fs::read_to_string(store.raw_path(2)).unwrap(), "Text three");
    assert!(!store.raw_path(3).exists());
    assert_eq!(validate_dataset(assets.path()).unwrap(), 2);
}

#[tokio::test]
async fn test_abort_policy_fails_on_missing_body() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let assets = TempDir::new().unwrap();

    mount_page(&mock_server, "/index", index_page(&["/a1"])).await;
    mount_page(
        &mock_server,
        "/a1",
        r#"<html><body><div class="headline">No body here</div></body></html>"#.to_string(),
    )
    .await;

    let config = create_test_config(
        &base_url,
        vec![format!("{}/index", base_url)],
        1,
        ArticleErrorPolicy::Abort,
        assets.path(),
    );

    let mut coordinator = Coordinator::new(config, "test-hash").unwrap();
    let result = coordinator.run().await;

    assert!(matches!(
        result,
        Err(HarvestError::Extraction(ExtractionError::MissingBody { .. }))
    ));

    let run: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(FileStore::new(assets.path()).manifest_path()).unwrap(),
    )
    .unwrap();
    assert_eq!(run["status"], "failed");
}

#[tokio::test]
async fn test_missing_seed_page_fails_run() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let assets = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/index"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = create_test_config(
        &base_url,
        vec![format!("{}/index", base_url)],
        3,
        ArticleErrorPolicy::Skip,
        assets.path(),
    );

    let mut coordinator = Coordinator::new(config, "test-hash").unwrap();
    let result = coordinator.run().await;

    assert!(matches!(
        result,
        Err(HarvestError::Fetch(FetchError::Status { status: 404, .. }))
    ));
}

#[tokio::test]
async fn test_body_decoded_as_utf8_regardless_of_charset_header() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let html = article_page("Заголовок", "Автор", "Текст статьи");
    Mock::given(method("GET"))
        .and(path("/ru"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(html.into_bytes())
                .insert_header("content-type", "text/html; charset=windows-1251"),
        )
        .mount(&mock_server)
        .await;

    let site = SiteProfile::from_config(&SiteConfig {
        origin: base_url.clone(),
        ..SiteConfig::default()
    })
    .unwrap();
    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();
    let extractor = ArticleExtractor::new(&fetcher, &site);

    let article = extractor
        .extract(&format!("{}/ru", base_url), 1)
        .await
        .unwrap();

    assert_eq!(article.title, "Заголовок");
    assert_eq!(article.author, "Автор");
    assert_eq!(article.text, "Текст статьи");
}
