// Fetch module tests.

use super::*;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error_handling::FetchFailureType;

fn fetcher_with_timeout(timeout: Duration) -> (PageFetcher, Arc<ProcessingStats>) {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to build test client");
    let stats = Arc::new(ProcessingStats::new());
    (
        PageFetcher::new(Arc::new(client), Arc::clone(&stats)),
        stats,
    )
}

fn content_type(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
    headers
}

#[test]
fn test_is_html_response_case_insensitive() {
    assert!(is_html_response(&content_type("text/html; charset=utf-8")));
    assert!(is_html_response(&content_type("TEXT/HTML")));
    assert!(is_html_response(&content_type("application/xhtml+xml")));
    assert!(!is_html_response(&content_type("application/json")));
    assert!(!is_html_response(&HeaderMap::new()));
}

#[tokio::test]
async fn test_fetch_html_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(
                    "<html><head><title>Login</title><script src=\"/a.js\"></script></head>\
                     <body><form action=\"/post\"></form></body></html>",
                    "text/html; charset=utf-8",
                ),
        )
        .mount(&server)
        .await;

    let (fetcher, stats) = fetcher_with_timeout(Duration::from_secs(5));
    let page = fetcher
        .fetch_page_features(&format!("{}/login", server.uri()))
        .await;

    assert!(page.has_title);
    assert!(page.has_form);
    assert!(page.has_javascript);
    assert!(!page.has_iframe);
    assert_eq!(stats.total_fetch_failures(), 0);
}

#[tokio::test]
async fn test_fetch_non_html_page_is_empty_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{\"title\": \"<title>not markup</title>\"}", "application/json"),
        )
        .mount(&server)
        .await;

    let (fetcher, stats) = fetcher_with_timeout(Duration::from_secs(5));
    let page = fetcher.fetch_page_features(&server.uri()).await;

    assert_eq!(page, PageFeatures::empty());
    // Not a failure, just nothing to analyze
    assert_eq!(stats.total_fetch_failures(), 0);
}

#[tokio::test]
async fn test_fetch_error_status_still_analyzed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw("<title>Not Found</title>", "text/html"),
        )
        .mount(&server)
        .await;

    let (fetcher, _) = fetcher_with_timeout(Duration::from_secs(5));
    let page = fetcher.fetch_page_features(&server.uri()).await;
    assert!(page.has_title);
}

#[tokio::test]
async fn test_fetch_unreachable_host_falls_back() {
    // Port 1 on loopback refuses connections
    let (fetcher, stats) = fetcher_with_timeout(Duration::from_secs(5));
    let page = fetcher.fetch_page_features("http://127.0.0.1:1/").await;

    assert_eq!(page, PageFeatures::empty());
    assert_eq!(stats.total_fetch_failures(), 1);
}

#[tokio::test]
async fn test_fetch_timeout_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<title>slow</title>", "text/html")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let (fetcher, stats) = fetcher_with_timeout(Duration::from_millis(200));
    let page = fetcher.fetch_page_features(&server.uri()).await;

    assert_eq!(page, PageFeatures::empty());
    assert_eq!(
        stats.get_fetch_failure_count(FetchFailureType::TimeoutError),
        1
    );
}

#[tokio::test]
async fn test_fetch_invalid_url_falls_back() {
    let (fetcher, stats) = fetcher_with_timeout(Duration::from_secs(5));
    let page = fetcher.fetch_page_features("not a url").await;

    assert_eq!(page, PageFeatures::empty());
    assert_eq!(
        stats.get_fetch_failure_count(FetchFailureType::InvalidUrl),
        1
    );
}
