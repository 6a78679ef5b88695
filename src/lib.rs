// src/lib.rs

pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod io;
pub mod leads;
pub mod lifecycle;
pub mod scoring;

pub use analyzer::{analyze, build_report, SiteAnalyzer};
pub use config::{AppConfig, FetchConfig, ScoringConfig};
pub use domain::models::{score_color, FetchOutcome, ScoreBand, ScoreReport, SignalBundle};
pub use error::{AppError, Result};
pub use extractor::PageExtractor;
pub use io::{HttpFetcher, PageFetcher};
pub use leads::{generate_leads, LeadRecord};
