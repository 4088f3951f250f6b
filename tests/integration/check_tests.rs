//! Integration tests for the checker
//!
//! These tests use wiremock to serve pages from a mock HTTP server and run
//! the full fetch, extract and report cycle end-to-end.

use seo_checker::checker::check_url;
use seo_checker::config::Config;
use seo_checker::SeoError;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOME_PAGE: &str = r##"<html>
<head>
    <title> Site Home </title>
    <meta name="description" content=" Everything about foxes. ">
</head>
<body>
    <h2>Sub</h2>
    <h1>Main</h1>
    <img src="/fox.png" alt="A fox">
    <a href="#top">Top</a>
    <a href="mailto:x@y.com">Mail</a>
    <a href="/about">About</a>
    <a href="https://ext.example/p">Partner</a>
    <p>the quick quick fox fox fox</p>
</body>
</html>"##;

/// Creates a test configuration writing reports into `dir`
fn create_test_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.report.output_dir = dir.path().to_path_buf();
    config
}

/// Report filename the checker derives for the mock server's URL
fn expected_filename(server: &MockServer) -> String {
    let uri = server.uri();
    let host = uri.trim_start_matches("http://").trim_end_matches('/');
    format!("{}.txt", host)
}

async fn mount_html(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_check_writes_report() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/", 200, HOME_PAGE).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&dir);
    let base_url = format!("{}/", mock_server.uri());

    let outcome = check_url(&base_url, &config).await.expect("Check failed");

    let report = &outcome.report;
    assert_eq!(report.title, "Site Home");
    assert_eq!(report.meta_description, "Everything about foxes.");
    assert_eq!(report.headings[0].text, "Main");
    assert_eq!(report.headings[1].text, "Sub");
    assert_eq!(report.internal_links.len(), 1);
    assert_eq!(
        report.internal_links[0].url,
        format!("{}/about", mock_server.uri())
    );
    assert_eq!(report.external_links[0].url, "https://ext.example/p");
    assert_eq!(report.common_words[0], ("fox".to_string(), 3));

    let report_path = dir.path().join(expected_filename(&mock_server));
    assert_eq!(outcome.report_path, report_path);

    let text = std::fs::read_to_string(&report_path).expect("Report not written");
    assert!(text.starts_with("Title:\nSite Home\n\nMeta Description:\nEverything about foxes.\n\n"));
    assert!(text.contains("Headings:\nH1: Main\nH2: Sub\n\n"));
    assert!(text.contains("Image Source: /fox.png\nAlt Text: A fox\n"));
    assert!(text.contains("External Links with Alt Text:\nURL: https://ext.example/p\nAlt Text: \n\n"));
    assert!(text.contains("Common Words:\nfox: 3\nquick: 2\n"));
    assert!(!text.contains("mailto:"));
}

#[tokio::test]
async fn test_rerun_overwrites_report() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/", 200, HOME_PAGE).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&dir);
    let url = mock_server.uri();

    let first = check_url(&url, &config).await.expect("First check failed");
    let first_text = std::fs::read_to_string(&first.report_path).unwrap();

    let second = check_url(&url, &config).await.expect("Second check failed");
    let second_text = std::fs::read_to_string(&second.report_path).unwrap();

    assert_eq!(first.report_path, second.report_path);
    assert_eq!(first_text, second_text);
}

#[tokio::test]
async fn test_internal_links_resolve_against_redirect_target() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/new/index.html", mock_server.uri()).as_str()),
        )
        .mount(&mock_server)
        .await;

    mount_html(
        &mock_server,
        "/new/index.html",
        200,
        r#"<html><head><title>New</title></head><body><a href="page">Next</a></body></html>"#,
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&dir);

    let outcome = check_url(&format!("{}/old", mock_server.uri()), &config)
        .await
        .expect("Check failed");

    assert_eq!(outcome.report.title, "New");
    assert_eq!(
        outcome.report.internal_links[0].url,
        format!("{}/new/page", mock_server.uri())
    );
}

#[tokio::test]
async fn test_missing_title_leaves_no_report() {
    let mock_server = MockServer::start().await;
    mount_html(
        &mock_server,
        "/",
        200,
        "<html><head></head><body><h1>Untitled</h1></body></html>",
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&dir);

    let result = check_url(&mock_server.uri(), &config).await;

    assert!(matches!(result, Err(SeoError::MissingTitle { .. })));
    assert!(!dir.path().join(expected_filename(&mock_server)).exists());
}

#[tokio::test]
async fn test_error_status_is_parsed_by_default() {
    let mock_server = MockServer::start().await;
    mount_html(
        &mock_server,
        "/",
        404,
        "<html><head><title>Not Found</title></head><body>gone</body></html>",
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&dir);

    let outcome = check_url(&mock_server.uri(), &config)
        .await
        .expect("Best-effort check failed");

    assert_eq!(outcome.status_code, 404);
    assert_eq!(outcome.report.title, "Not Found");
}

#[tokio::test]
async fn test_error_status_fails_in_strict_mode() {
    let mock_server = MockServer::start().await;
    mount_html(
        &mock_server,
        "/",
        500,
        "<html><head><title>Oops</title></head></html>",
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config(&dir);
    config.fetch.strict_status = true;

    let result = check_url(&mock_server.uri(), &config).await;

    assert!(matches!(
        result,
        Err(SeoError::HttpStatus { status: 500, .. })
    ));
    assert!(!dir.path().join(expected_filename(&mock_server)).exists());
}

#[tokio::test]
async fn test_unreachable_host_is_fetch_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&dir);

    // Nothing listens on port 1
    let result = check_url("http://127.0.0.1:1/", &config).await;

    assert!(matches!(result, Err(SeoError::Fetch { .. })));
    assert!(!dir.path().join("127.0.0.1:1.txt").exists());
}

#[tokio::test]
async fn test_invalid_url_is_rejected_before_fetch() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&dir);

    let result = check_url("ftp://site.example/", &config).await;
    assert!(matches!(result, Err(SeoError::UnsupportedScheme { .. })));
}

#[tokio::test]
async fn test_write_failure_is_write_error() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/", 200, HOME_PAGE).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config(&dir);
    config.report.output_dir = dir.path().join("does-not-exist");

    let result = check_url(&mock_server.uri(), &config).await;
    assert!(matches!(result, Err(SeoError::Write { .. })));
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_fetch() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/", 200, HOME_PAGE).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config(&dir);
    config.report.common_words = 0;

    let result = check_url(&mock_server.uri(), &config).await;

    assert!(matches!(result, Err(SeoError::Config(_))));
    assert!(!dir.path().join(expected_filename(&mock_server)).exists());
    assert!(mock_server.received_requests().await.unwrap_or_default().is_empty());
}
