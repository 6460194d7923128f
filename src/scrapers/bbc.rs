//! BBC News scraper.
//!
//! The [BBC News homepage](https://www.bbc.com/news) puts every story title in
//! an `h2`, so all of them are taken. Summaries and links are not extracted.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::{SourceAdapter, element_text, selector};
use crate::models::Article;

static HEADLINES: Lazy<Selector> = Lazy::new(|| selector("h2"));

#[derive(Debug, Clone, Copy, Default)]
pub struct BbcAdapter;

impl SourceAdapter for BbcAdapter {
    fn id(&self) -> &'static str {
        "bbc"
    }

    fn url(&self) -> &'static str {
        "https://www.bbc.com/news"
    }

    fn extract(&self, document: &Html) -> Vec<Article> {
        document
            .select(&HEADLINES)
            .filter_map(|h2| Article::new(element_text(h2)))
            .collect()
    }
}
