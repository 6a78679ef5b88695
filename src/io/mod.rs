pub mod http_client;

pub use http_client::{normalize_url, HttpFetcher, PageFetcher};
