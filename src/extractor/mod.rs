pub mod page_extractor;

pub use page_extractor::{alt_ratio_pct, PageExtractor};
