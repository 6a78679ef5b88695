use serde::Serialize;

use crate::config::{OverallWeights, PerfTiers, ScoringConfig, SeoWeights};
use crate::domain::models::{FetchOutcome, SignalBundle};

pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubScores {
    pub seo: u32,
    pub perf: u32,
}

/// Deterministic, additive scoring over a signal bundle.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, outcome: &FetchOutcome, signals: &SignalBundle) -> SubScores {
        SubScores {
            seo: seo_score(signals, &self.config.seo),
            perf: perf_score(outcome, signals, &self.config.performance),
        }
    }

    pub fn overall(&self, scores: SubScores, alt_ratio_pct: f64) -> u32 {
        overall_score(scores, alt_ratio_pct, &self.config.overall)
    }
}

pub fn seo_score(signals: &SignalBundle, weights: &SeoWeights) -> u32 {
    let mut score = 0;
    if !signals.title.is_empty() {
        score += weights.title_present;
    }
    if weights.title_range.contains(signals.title_len()) {
        score += weights.title_length;
    }
    if !signals.meta_description.is_empty() {
        score += weights.meta_present;
    }
    if weights.meta_range.contains(signals.meta_description_len()) {
        score += weights.meta_length;
    }
    if signals.h1_count() == 1 {
        score += weights.single_h1;
    }
    score.min(MAX_SCORE)
}

pub fn perf_score(outcome: &FetchOutcome, signals: &SignalBundle, tiers: &PerfTiers) -> u32 {
    let mut score = tiers.response_time.points(outcome.elapsed_seconds);
    score += tiers.page_size.points(outcome.size_kib);
    if signals.alt_ratio_pct >= tiers.alt_ratio_min_pct {
        score += tiers.alt_ratio_points;
    }
    score.min(MAX_SCORE)
}

/// `floor(seo_w*seo + perf_w*perf + alt_w*alt_ratio)`, clamped to 0..=100.
pub fn overall_score(scores: SubScores, alt_ratio_pct: f64, weights: &OverallWeights) -> u32 {
    let raw = weights.seo * f64::from(scores.seo)
        + weights.perf * f64::from(scores.perf)
        + weights.alt_ratio * alt_ratio_pct;
    raw.floor().clamp(0.0, f64::from(MAX_SCORE)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::PageExtractor;

    fn outcome(elapsed_seconds: f64, size_kib: f64) -> FetchOutcome {
        FetchOutcome {
            url: "https://example.com".to_string(),
            ok: true,
            elapsed_seconds,
            size_kib,
            html: String::new(),
            status_code: Some(200),
            error: None,
        }
    }

    fn signals_with_alt(alt_ratio_pct: f64) -> SignalBundle {
        SignalBundle {
            alt_ratio_pct,
            ..Default::default()
        }
    }

    #[test]
    fn title_only_page_scores_25() {
        let signals =
            PageExtractor::extract("<html><head><title>A</title></head><body></body></html>");
        assert_eq!(seo_score(&signals, &SeoWeights::default()), 25);
    }

    #[test]
    fn well_formed_page_scores_full_seo() {
        let signals = SignalBundle {
            title: "t".repeat(50),
            meta_description: "m".repeat(120),
            heading1_texts: vec!["Heading".to_string()],
            ..Default::default()
        };
        assert_eq!(seo_score(&signals, &SeoWeights::default()), 100);
    }

    #[test]
    fn length_windows_are_inclusive() {
        let weights = SeoWeights::default();
        for (len, expected) in [(34, 25), (35, 40), (65, 40), (66, 25)] {
            let signals = SignalBundle {
                title: "x".repeat(len),
                ..Default::default()
            };
            assert_eq!(seo_score(&signals, &weights), expected, "title len {}", len);
        }
        for (len, expected) in [(79, 25), (80, 40), (160, 40), (161, 25)] {
            let signals = SignalBundle {
                meta_description: "x".repeat(len),
                ..Default::default()
            };
            assert_eq!(seo_score(&signals, &weights), expected, "meta len {}", len);
        }
    }

    #[test]
    fn multiple_h1_earns_nothing() {
        let signals = SignalBundle {
            heading1_texts: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        assert_eq!(seo_score(&signals, &SeoWeights::default()), 0);
    }

    #[test]
    fn fast_light_accessible_page_scores_full_perf() {
        let tiers = PerfTiers::default();
        for elapsed in [0.0, 0.25, 0.999] {
            for size in [0.0, 700.0, 1499.9] {
                for alt in [80.0, 92.5, 100.0] {
                    let score = perf_score(&outcome(elapsed, size), &signals_with_alt(alt), &tiers);
                    assert_eq!(score, 100, "elapsed={} size={} alt={}", elapsed, size, alt);
                }
            }
        }
    }

    #[test]
    fn slow_heavy_page_scores_20() {
        let score = perf_score(
            &outcome(2.5, 5000.0),
            &signals_with_alt(50.0),
            &PerfTiers::default(),
        );
        assert_eq!(score, 20);
    }

    #[test]
    fn perf_tiers_are_lower_inclusive() {
        let tiers = PerfTiers::default();
        let full_alt = signals_with_alt(100.0);
        assert_eq!(perf_score(&outcome(1.0, 1500.0), &full_alt, &tiers), 25 + 25 + 20);
        assert_eq!(perf_score(&outcome(2.0, 3500.0), &full_alt, &tiers), 10 + 10 + 20);
        assert_eq!(perf_score(&outcome(1.5, 0.0), &signals_with_alt(79.9), &tiers), 25 + 40);
    }

    #[test]
    fn scores_are_clamped_when_weights_overflow() {
        let weights = SeoWeights {
            title_present: 90,
            title_length: 90,
            ..Default::default()
        };
        let signals = SignalBundle {
            title: "x".repeat(40),
            ..Default::default()
        };
        assert_eq!(seo_score(&signals, &weights), 100);

        let mut tiers = PerfTiers::default();
        tiers.alt_ratio_points = 500;
        assert_eq!(perf_score(&outcome(0.1, 1.0), &signals_with_alt(100.0), &tiers), 100);
    }

    #[test]
    fn overall_follows_weighted_floor() {
        let weights = OverallWeights::default();
        for seo in (0..=100).step_by(5) {
            for perf in (0..=100).step_by(5) {
                for alt in [0.0, 33.3, 50.0, 66.7, 80.0, 100.0] {
                    let expected = (0.5 * seo as f64 + 0.4 * perf as f64 + 0.1 * alt).floor() as u32;
                    let got = overall_score(SubScores { seo, perf }, alt, &weights);
                    assert_eq!(got, expected);
                    assert!(got <= 100);
                }
            }
        }
    }

    #[test]
    fn overall_examples() {
        let weights = OverallWeights::default();
        assert_eq!(overall_score(SubScores { seo: 25, perf: 60 }, 100.0, &weights), 46);
        assert_eq!(overall_score(SubScores { seo: 100, perf: 100 }, 100.0, &weights), 100);
        assert_eq!(overall_score(SubScores { seo: 0, perf: 0 }, 0.0, &weights), 0);
    }
}
