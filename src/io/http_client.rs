use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::FetchConfig;
use crate::domain::models::FetchOutcome;
use crate::error::{AppError, Result};

/// Source of page bodies for an analysis.
///
/// Implementations never fail: transport problems come back as an outcome
/// with `ok == false`.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// Prefix `https://` unless the input already names an http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Single-attempt GET with a hard timeout. No retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::http_client(e.to_string()))?;
        Ok(Self { client, timeout })
    }

    fn describe(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("request timed out after {}s", self.timeout.as_secs())
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else if err.is_builder() {
            format!("invalid URL: {}", err)
        } else {
            err.to_string()
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        let target = normalize_url(url);
        let start = Instant::now();

        let response = match self.client.get(&target).send().await {
            Ok(resp) => resp,
            Err(e) => {
                let elapsed = start.elapsed().as_secs_f64();
                log::warn!("Fetch of {} failed after {:.2}s: {}", target, elapsed, e);
                return FetchOutcome::failure(target, elapsed, self.describe(&e));
            }
        };

        // Latency up to the response head; body transfer is accounted for in size.
        let latency = start.elapsed().as_secs_f64();
        let status = response.status().as_u16();
        let charset = charset_label(response.headers());

        match response.bytes().await {
            Ok(body) => {
                let html = decode_body(&body, charset.as_deref());
                log::debug!(
                    "Fetched {} -> HTTP {} in {:.3}s ({} bytes)",
                    target,
                    status,
                    latency,
                    body.len()
                );
                FetchOutcome::success(target, latency, body.len(), html, status)
            }
            Err(e) => {
                let elapsed = start.elapsed().as_secs_f64();
                log::warn!("Reading body of {} failed after {:.2}s: {}", target, elapsed, e);
                FetchOutcome::failure(target, elapsed, self.describe(&e))
            }
        }
    }
}

fn charset_label(headers: &HeaderMap) -> Option<String> {
    let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_string())
    })
}

/// Lossy decode; unknown labels fall back to UTF-8 and a BOM overrides the label.
fn decode_body(bytes: &[u8], label: Option<&str>) -> String {
    let encoding = label
        .and_then(|l| Encoding::for_label(l.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}
