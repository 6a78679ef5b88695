//! Remediation notes derived from the same signals the scorer sees.
//!
//! Rules run in a fixed content-then-performance order and each emits at most
//! one note. The order is part of the output contract and is not re-ranked by
//! score impact.

use crate::config::ScoringConfig;
use crate::domain::models::{FetchOutcome, SignalBundle};
use crate::scoring::scorer::SubScores;

pub fn suggest(
    outcome: &FetchOutcome,
    signals: &SignalBundle,
    _scores: SubScores,
    config: &ScoringConfig,
) -> Vec<String> {
    let seo = &config.seo;
    let perf = &config.performance;
    let mut notes = Vec::new();

    if signals.title.is_empty() {
        notes.push(format!(
            "Missing <title> tag: add a descriptive title ({}-{} characters).",
            seo.title_range.min, seo.title_range.max
        ));
    } else if !seo.title_range.contains(signals.title_len()) {
        notes.push(format!(
            "Title is {} characters long: aim for {}-{}.",
            signals.title_len(),
            seo.title_range.min,
            seo.title_range.max
        ));
    }

    if signals.meta_description.is_empty() {
        notes.push(format!(
            "Meta description is missing: add one ({}-{} characters) to lift click-through rate.",
            seo.meta_range.min, seo.meta_range.max
        ));
    } else if !seo.meta_range.contains(signals.meta_description_len()) {
        notes.push(format!(
            "Meta description is {} characters long: trim it to {}-{}.",
            signals.meta_description_len(),
            seo.meta_range.min,
            seo.meta_range.max
        ));
    }

    if signals.h1_count() != 1 {
        notes.push(format!(
            "Use exactly one <h1>: found {}.",
            signals.h1_count()
        ));
    }

    let time_target = perf.response_time.target();
    if outcome.elapsed_seconds >= time_target {
        notes.push(format!(
            "Reduce response time: currently {:.2}s (target < {}s).",
            outcome.elapsed_seconds, time_target
        ));
    }

    let size_target = perf.page_size.target();
    if outcome.size_kib >= size_target {
        notes.push(format!(
            "Reduce page weight: currently {:.1} KiB (target < {} KiB); compress images and minify JS/CSS.",
            outcome.size_kib, size_target
        ));
    }

    if signals.alt_ratio_pct < perf.alt_ratio_min_pct {
        notes.push(format!(
            "Add image alt text: only {:.1}% of {} images have it (target >= {}%).",
            signals.alt_ratio_pct, signals.images_total, perf.alt_ratio_min_pct
        ));
    }

    notes
}
