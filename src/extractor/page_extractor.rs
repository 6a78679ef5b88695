use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

use crate::domain::models::{round_to, SignalBundle};

fn selector(cell: &'static OnceLock<Selector>, css: &str) -> &'static Selector {
    cell.get_or_init(|| Selector::parse(css).expect("static selector must parse"))
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub struct PageExtractor;

impl PageExtractor {
    /// Parse `html` into a signal bundle. Malformed or empty markup degrades
    /// field by field to empty values.
    pub fn extract(html: &str) -> SignalBundle {
        let document = Html::parse_document(html);
        let (images_total, images_with_alt) = Self::count_images(&document);

        SignalBundle {
            title: Self::extract_title(&document),
            meta_description: Self::extract_meta_description(&document),
            heading1_texts: Self::extract_h1_texts(&document),
            images_total,
            images_with_alt,
            alt_ratio_pct: alt_ratio_pct(images_with_alt, images_total),
        }
    }

    pub fn extract_title(html: &Html) -> String {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        html.select(selector(&SELECTOR, "title"))
            .next()
            .map(trimmed_text)
            .unwrap_or_default()
    }

    /// `meta[name=description]` wins when the tag exists at all; Open Graph is
    /// only consulted when it does not.
    pub fn extract_meta_description(html: &Html) -> String {
        static NAME: OnceLock<Selector> = OnceLock::new();
        static OG: OnceLock<Selector> = OnceLock::new();

        html.select(selector(&NAME, "meta[name='description']"))
            .next()
            .or_else(|| {
                html.select(selector(&OG, "meta[property='og:description']"))
                    .next()
            })
            .and_then(|el| el.value().attr("content"))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    pub fn extract_h1_texts(html: &Html) -> Vec<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        html.select(selector(&SELECTOR, "h1"))
            .map(trimmed_text)
            .collect()
    }

    /// Returns `(total, with_non_empty_alt)`.
    pub fn count_images(html: &Html) -> (usize, usize) {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        html.select(selector(&SELECTOR, "img"))
            .fold((0, 0), |(total, with_alt), img| {
                let has_alt = img
                    .value()
                    .attr("alt")
                    .is_some_and(|alt| !alt.is_empty());
                (total + 1, with_alt + usize::from(has_alt))
            })
    }
}

/// Percentage of images carrying alt text, one decimal. No images is treated
/// as fully compliant.
pub fn alt_ratio_pct(with_alt: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    round_to(with_alt as f64 / total as f64 * 100.0, 1)
}
