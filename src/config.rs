//! Tunable settings for fetching and scoring.
//!
//! Every threshold and point value the scorer uses lives here so it can be
//! recalibrated from a JSON file without touching the scoring rules. The
//! `Default` impls carry the stock calibration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; sitescore/0.1)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Inclusive character-length window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoWeights {
    pub title_present: u32,
    pub title_length: u32,
    pub title_range: LengthRange,
    pub meta_present: u32,
    pub meta_length: u32,
    pub meta_range: LengthRange,
    pub single_h1: u32,
}

impl Default for SeoWeights {
    fn default() -> Self {
        Self {
            title_present: 25,
            title_length: 15,
            title_range: LengthRange::new(35, 65),
            meta_present: 25,
            meta_length: 15,
            meta_range: LengthRange::new(80, 160),
            single_h1: 20,
        }
    }
}

/// A value strictly below `below` earns `points`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub below: f64,
    pub points: u32,
}

/// Ordered buckets; the first tier whose bound exceeds the value wins,
/// anything past the last bound earns `fallback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub tiers: Vec<Tier>,
    pub fallback: u32,
}

impl TierTable {
    pub fn points(&self, value: f64) -> u32 {
        self.tiers
            .iter()
            .find(|tier| value < tier.below)
            .map(|tier| tier.points)
            .unwrap_or(self.fallback)
    }

    /// Bound of the best tier: values at or above it are worth flagging.
    pub fn target(&self) -> f64 {
        self.tiers.first().map(|t| t.below).unwrap_or(f64::INFINITY)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.tiers.is_empty() {
            return Err(AppError::config(format!("{name}: at least one tier is required")));
        }
        let ascending = self.tiers.windows(2).all(|w| w[0].below < w[1].below);
        if !ascending {
            return Err(AppError::config(format!(
                "{name}: tier bounds must be strictly ascending"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfTiers {
    /// Seconds.
    pub response_time: TierTable,
    /// KiB.
    pub page_size: TierTable,
    pub alt_ratio_min_pct: f64,
    pub alt_ratio_points: u32,
}

impl Default for PerfTiers {
    fn default() -> Self {
        Self {
            response_time: TierTable {
                tiers: vec![
                    Tier { below: 1.0, points: 40 },
                    Tier { below: 2.0, points: 25 },
                ],
                fallback: 10,
            },
            page_size: TierTable {
                tiers: vec![
                    Tier { below: 1500.0, points: 40 },
                    Tier { below: 3500.0, points: 25 },
                ],
                fallback: 10,
            },
            alt_ratio_min_pct: 80.0,
            alt_ratio_points: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallWeights {
    pub seo: f64,
    pub perf: f64,
    pub alt_ratio: f64,
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self {
            seo: 0.5,
            perf: 0.4,
            alt_ratio: 0.1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub seo: SeoWeights,
    pub performance: PerfTiers,
    pub overall: OverallWeights,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, range) in [
            ("seo.title_range", self.seo.title_range),
            ("seo.meta_range", self.seo.meta_range),
        ] {
            if range.min > range.max {
                return Err(AppError::config(format!(
                    "{name}: min {} exceeds max {}",
                    range.min, range.max
                )));
            }
        }
        self.performance
            .response_time
            .validate("performance.response_time")?;
        self.performance.page_size.validate("performance.page_size")?;

        let w = self.overall;
        if [w.seo, w.perf, w.alt_ratio].iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(AppError::config("overall weights must be finite and non-negative"));
        }
        Ok(())
    }
}

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub fetch: FetchConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Load from a JSON file. Missing sections fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::config("fetch.timeout_secs must be greater than zero"));
        }
        self.scoring.validate()
    }
}
