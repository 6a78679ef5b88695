//! End-to-end tests for single-page analysis against a local HTTP server.

use sitescore::config::{AppConfig, FetchConfig, DEFAULT_USER_AGENT};
use sitescore::{HttpFetcher, PageFetcher, SiteAnalyzer};
use std::io::Write;
use std::time::Duration;

const GOOD_PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title>Family Dentist in Berlin Mitte - Gentle Care Since 1998</title>
  <meta name="description" content="Modern dental practice in Berlin Mitte offering check-ups, cleanings, implants and emergency appointments six days a week.">
</head>
<body>
  <h1>Gentle dental care in Berlin</h1>
  <img src="/team.jpg" alt="Our team">
  <img src="/office.jpg" alt="Reception">
</body>
</html>"#;

fn fast_config(timeout_secs: u64) -> AppConfig {
    AppConfig {
        fetch: FetchConfig {
            timeout_secs,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn scores_a_well_built_page() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_header("user-agent", DEFAULT_USER_AGENT)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(GOOD_PAGE)
        .create_async()
        .await;

    let analyzer = SiteAnalyzer::from_config(&AppConfig::default()).unwrap();
    let report = analyzer.analyze(&server.url()).await;

    mock.assert_async().await;
    assert!(report.ok);
    assert_eq!(report.metrics.status_code, Some(200));
    assert_eq!(report.seo.seo_score, 100, "suggestions: {:?}", report.suggestions);
    assert_eq!(report.metrics.images_alt_pct, 100.0);
    assert_eq!(report.seo.h1_samples, vec!["Gentle dental care in Berlin"]);
    assert!(report.metrics.html_size_kib > 0.0);
    assert!(report.suggestions.iter().all(|s| s.starts_with("Reduce response time")));
}

#[tokio::test]
async fn error_status_still_counts_as_reached() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("<html><head><title>Not Found</title></head><body><h1>404</h1></body></html>")
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
    let outcome = fetcher.fetch(&format!("{}/missing", server.url())).await;

    assert!(outcome.ok);
    assert_eq!(outcome.status_code, Some(404));
    assert!(outcome.html.contains("Not Found"));
}

#[tokio::test]
async fn decodes_declared_charset() {
    let mut server = mockito::Server::new_async().await;
    let body: &[u8] = b"<html><head><title>Zahnarzt M\xfcnchen</title></head></html>";
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=ISO-8859-1")
        .with_body(body)
        .create_async()
        .await;

    let analyzer = SiteAnalyzer::from_config(&AppConfig::default()).unwrap();
    let report = analyzer.analyze(&server.url()).await;

    assert_eq!(report.seo.title, "Zahnarzt München");
}

#[tokio::test]
async fn size_is_reported_in_kib() {
    let mut server = mockito::Server::new_async().await;
    let body = "a".repeat(3 * 1024 + 512);
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
    let outcome = fetcher.fetch(&server.url()).await;

    assert_eq!(outcome.size_kib, 3.5);
}

#[tokio::test]
async fn refused_connection_yields_degraded_report() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let analyzer = SiteAnalyzer::from_config(&fast_config(2)).unwrap();
    let report = analyzer.analyze(&format!("http://127.0.0.1:{}", port)).await;

    assert!(!report.ok);
    assert_eq!(report.metrics.html_size_kib, 0.0);
    assert_eq!(report.metrics.status_code, None);
    assert!(report.metrics.error.is_some());
    assert_eq!(report.seo.seo_score, 0);
    assert!(report.suggestions.iter().any(|s| s.starts_with("Missing <title> tag")));
}

#[tokio::test]
async fn slow_server_times_out() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_secs(3));
            w.write_all(b"<title>late</title>")
        })
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&fast_config(1).fetch).unwrap();
    let outcome = fetcher.fetch(&server.url()).await;

    assert!(!outcome.ok);
    assert_eq!(outcome.size_kib, 0.0);
    assert!(outcome.html.is_empty());
    assert!(outcome.elapsed_seconds >= 0.9, "elapsed {}", outcome.elapsed_seconds);
    assert!(outcome.elapsed_seconds < 3.0, "elapsed {}", outcome.elapsed_seconds);
}

#[tokio::test]
async fn garbage_input_never_panics() {
    let analyzer = SiteAnalyzer::from_config(&AppConfig::default()).unwrap();
    for input in ["", "   ", "not a url at all", "https://exa mple.com"] {
        let report = analyzer.analyze(input).await;
        assert!(!report.ok, "input {:?}", input);
        assert_eq!(report.seo.seo_score, 0);
        assert!(report.overall_score <= 100);
    }
}
