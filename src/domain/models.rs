//! Value types flowing through one analysis: fetch outcome -> signals -> report.

use serde::{Deserialize, Serialize};

// ====== Enums ======

/// Severity band shared by site reports and synthesized leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Success,
    Warning,
    Danger,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => ScoreBand::Success,
            60..=79 => ScoreBand::Warning,
            _ => ScoreBand::Danger,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Success => "success",
            ScoreBand::Warning => "warning",
            ScoreBand::Danger => "danger",
        }
    }
}

/// `>= 80` success, `>= 60` warning, otherwise danger.
pub fn score_color(score: u32) -> &'static str {
    ScoreBand::from_score(score).as_str()
}

// ====== Fetch ======

/// Result of the single GET issued for an analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchOutcome {
    /// URL actually requested, after scheme normalization.
    pub url: String,
    pub ok: bool,
    pub elapsed_seconds: f64,
    pub size_kib: f64,
    #[serde(skip)]
    pub html: String,
    pub status_code: Option<u16>,
    pub error: Option<String>,
}

impl FetchOutcome {
    pub fn success(
        url: impl Into<String>,
        elapsed_seconds: f64,
        byte_len: usize,
        html: String,
        status_code: u16,
    ) -> Self {
        Self {
            url: url.into(),
            ok: true,
            elapsed_seconds,
            size_kib: round_to(byte_len as f64 / 1024.0, 1),
            html,
            status_code: Some(status_code),
            error: None,
        }
    }

    pub fn failure(url: impl Into<String>, elapsed_seconds: f64, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ok: false,
            elapsed_seconds,
            size_kib: 0.0,
            html: String::new(),
            status_code: None,
            error: Some(error.into()),
        }
    }
}

// ====== Signals ======

/// Structural page features, independent of any scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalBundle {
    pub title: String,
    pub meta_description: String,
    pub heading1_texts: Vec<String>,
    pub images_total: usize,
    pub images_with_alt: usize,
    pub alt_ratio_pct: f64,
}

impl Default for SignalBundle {
    /// The bundle of an empty document: no images counts as full alt coverage.
    fn default() -> Self {
        Self {
            title: String::new(),
            meta_description: String::new(),
            heading1_texts: Vec::new(),
            images_total: 0,
            images_with_alt: 0,
            alt_ratio_pct: 100.0,
        }
    }
}

impl SignalBundle {
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    pub fn meta_description_len(&self) -> usize {
        self.meta_description.chars().count()
    }

    pub fn h1_count(&self) -> usize {
        self.heading1_texts.len()
    }
}

// ====== Report ======

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetrics {
    pub response_time_s: f64,
    pub html_size_kib: f64,
    pub images_total: usize,
    pub images_alt_pct: f64,
    pub status_code: Option<u16>,
    /// Set when the site could not be reached.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoSection {
    pub title: String,
    pub meta_description: String,
    pub h1_count: usize,
    pub h1_samples: Vec<String>,
    pub seo_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSection {
    pub perf_score: u32,
}

/// Final output of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub ok: bool,
    /// URL as supplied by the caller.
    pub url: String,
    pub metrics: ReportMetrics,
    pub seo: SeoSection,
    pub performance: PerformanceSection,
    pub overall_score: u32,
    pub overall_band: ScoreBand,
    pub suggestions: Vec<String>,
}

impl ScoreReport {
    pub fn seo_score(&self) -> u32 {
        self.seo.seo_score
    }

    pub fn perf_score(&self) -> u32 {
        self.performance.perf_score
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
