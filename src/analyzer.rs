//! Single-page analysis: fetch, extract, score, suggest.
//!
//! An analyzer holds only an immutable client and configuration, so one
//! instance can serve concurrent callers; everything derived from a page stays
//! local to its `analyze` call.

use crate::config::{AppConfig, FetchConfig, ScoringConfig};
use crate::domain::models::{
    round_to, FetchOutcome, PerformanceSection, ReportMetrics, ScoreBand, ScoreReport, SeoSection,
    SignalBundle,
};
use crate::error::Result;
use crate::extractor::PageExtractor;
use crate::io::{normalize_url, HttpFetcher, PageFetcher};
use crate::scoring::{suggest, Scorer};

const H1_SAMPLES: usize = 3;

pub struct SiteAnalyzer<F: PageFetcher = HttpFetcher> {
    fetcher: F,
    scorer: Scorer,
}

impl SiteAnalyzer<HttpFetcher> {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Ok(Self::new(fetcher, config.scoring.clone()))
    }
}

impl<F: PageFetcher> SiteAnalyzer<F> {
    pub fn new(fetcher: F, scoring: ScoringConfig) -> Self {
        Self {
            fetcher,
            scorer: Scorer::new(scoring),
        }
    }

    /// Analyze one URL. Always produces a report; an unreachable site yields
    /// `ok == false` with the failure reason in `metrics.error`.
    #[tracing::instrument(skip(self))]
    pub async fn analyze(&self, url: &str) -> ScoreReport {
        log::info!("Starting analysis for URL: {}", url);
        let outcome = self.fetcher.fetch(url).await;
        let signals = PageExtractor::extract(&outcome.html);
        log::debug!(
            "Signals: title={} chars, meta={} chars, h1={}, images={}/{} with alt",
            signals.title_len(),
            signals.meta_description_len(),
            signals.h1_count(),
            signals.images_with_alt,
            signals.images_total
        );
        build_report(url, &outcome, &signals, &self.scorer)
    }
}

/// Assemble the report from an outcome and its signals. Pure.
pub fn build_report(
    url: &str,
    outcome: &FetchOutcome,
    signals: &SignalBundle,
    scorer: &Scorer,
) -> ScoreReport {
    let scores = scorer.score(outcome, signals);
    let overall_score = scorer.overall(scores, signals.alt_ratio_pct);
    let suggestions = suggest(outcome, signals, scores, scorer.config());

    ScoreReport {
        ok: outcome.ok,
        url: url.to_string(),
        metrics: ReportMetrics {
            response_time_s: round_to(outcome.elapsed_seconds, 2),
            html_size_kib: outcome.size_kib,
            images_total: signals.images_total,
            images_alt_pct: signals.alt_ratio_pct,
            status_code: outcome.status_code,
            error: outcome.error.clone(),
        },
        seo: SeoSection {
            title: signals.title.clone(),
            meta_description: signals.meta_description.clone(),
            h1_count: signals.h1_count(),
            h1_samples: signals.heading1_texts.iter().take(H1_SAMPLES).cloned().collect(),
            seo_score: scores.seo,
        },
        performance: PerformanceSection {
            perf_score: scores.perf,
        },
        overall_score,
        overall_band: ScoreBand::from_score(overall_score),
        suggestions,
    }
}

/// Analyze with the stock configuration.
pub async fn analyze(url: &str) -> ScoreReport {
    match HttpFetcher::new(&FetchConfig::default()) {
        Ok(fetcher) => {
            SiteAnalyzer::new(fetcher, ScoringConfig::default())
                .analyze(url)
                .await
        }
        Err(e) => {
            log::error!("Could not build HTTP client: {}", e);
            let outcome = FetchOutcome::failure(normalize_url(url), 0.0, e.to_string());
            build_report(url, &outcome, &SignalBundle::default(), &Scorer::default())
        }
    }
}
