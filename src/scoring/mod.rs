//! Sub-scores, overall score and remediation notes.

pub mod scorer;
pub mod suggestions;

pub use scorer::{overall_score, perf_score, seo_score, Scorer, SubScores, MAX_SCORE};
pub use suggestions::suggest;
