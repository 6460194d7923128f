//! The Manila Times scraper.
//!
//! Headlines on the [Manila Times homepage](https://www.manilatimes.net) sit
//! in `div`s whose class encodes the display size. All lead stories
//! (`article-title-h1`) come first, then `article-title-h4`, then
//! `article-title-h5`, regardless of where they appear on the page. Each
//! title `div` gives at most one headline, taken from its first anchor.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::{SourceAdapter, element_text, selector};
use crate::models::Article;

static HEADLINE_TIERS: Lazy<[Selector; 3]> = Lazy::new(|| {
    [
        selector("div.article-title-h1"),
        selector("div.article-title-h4"),
        selector("div.article-title-h5"),
    ]
});
static ANCHOR: Lazy<Selector> = Lazy::new(|| selector("a"));

#[derive(Debug, Clone, Copy, Default)]
pub struct ManilaTimesAdapter;

impl SourceAdapter for ManilaTimesAdapter {
    fn id(&self) -> &'static str {
        "manilatimes"
    }

    fn url(&self) -> &'static str {
        "https://www.manilatimes.net"
    }

    fn extract(&self, document: &Html) -> Vec<Article> {
        HEADLINE_TIERS
            .iter()
            .flat_map(|tier| document.select(tier))
            .filter_map(|title| title.select(&ANCHOR).next())
            .filter_map(|anchor| Article::new(element_text(anchor)))
            .collect()
    }
}
