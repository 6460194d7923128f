//! Rappler scraper.
//!
//! Story headlines on the [Rappler homepage](https://www.rappler.com) are
//! `h3 > a`. Video cards carry their title only in a `data-title` attribute;
//! those follow the story headlines.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::{SourceAdapter, element_text, selector};
use crate::models::Article;

static STORY_HEADLINES: Lazy<Selector> = Lazy::new(|| selector("h3 a"));
static VIDEO_CARDS: Lazy<Selector> = Lazy::new(|| selector("div[data-title]"));

#[derive(Debug, Clone, Copy, Default)]
pub struct RapplerAdapter;

impl SourceAdapter for RapplerAdapter {
    fn id(&self) -> &'static str {
        "rappler"
    }

    fn url(&self) -> &'static str {
        "https://www.rappler.com"
    }

    fn extract(&self, document: &Html) -> Vec<Article> {
        let stories = document
            .select(&STORY_HEADLINES)
            .filter_map(|anchor| Article::new(element_text(anchor)));

        let videos = document
            .select(&VIDEO_CARDS)
            .filter_map(|card| card.value().attr("data-title"))
            .filter_map(Article::new);

        stories.chain(videos).collect()
    }
}
