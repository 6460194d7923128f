//! News source scrapers.
//!
//! Each site gets one [`SourceAdapter`] that turns the parsed homepage into
//! [`Article`]s. Adapters never fail: a page whose markup no longer matches
//! simply yields no articles. The [`SourceRegistry`] maps source ids to
//! adapters, fetches the requested pages and concatenates the results.
//!
//! # Supported Sources
//!
//! | # | Id | Module | Notes |
//! |---|----|--------|-------|
//! | 1 | `inquirer` | [`inquirer`] | Only source with links and summaries |
//! | 2 | `bbc` | [`bbc`] | Every `h2` on the news homepage |
//! | 3 | `philstar` | [`selector`] | `h2.title a` |
//! | 4 | `manilatimes` | [`manilatimes`] | Three headline sizes, biggest first |
//! | 5 | `rappler` | [`rappler`] | Headlines plus video titles |
//! | 6 | `abscbn` | [`selector`] | `div.news-title a` |
//! | 7 | `pna` | [`selector`] | `div.post-content h1 a` |

use futures::future::join_all;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};

use crate::fetch::Fetcher;
use crate::models::Article;
use crate::utils::collapse_whitespace;

pub mod bbc;
pub mod inquirer;
pub mod manilatimes;
pub mod rappler;
pub mod selector;

/// Converts one site's parsed homepage into articles.
pub trait SourceAdapter: Send + Sync {
    /// Stable identifier used on the command line and in reports.
    fn id(&self) -> &'static str;

    /// Page to fetch.
    fn url(&self) -> &'static str;

    /// Extra request headers this site needs.
    fn headers(&self) -> &[(&'static str, &'static str)] {
        &[]
    }

    /// Extract articles in document order. Must not fail; an unrecognized
    /// page gives an empty list.
    fn extract(&self, document: &Html) -> Vec<Article>;
}

/// Ordered set of known sources.
pub struct SourceRegistry {
    adapters: Vec<Box<dyn SourceAdapter>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Registry holding every built-in source in its fixed order.
    pub fn with_default_sources() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(inquirer::InquirerAdapter));
        registry.register(Box::new(bbc::BbcAdapter));
        registry.register(Box::new(selector::SelectorAdapter::philstar()));
        registry.register(Box::new(manilatimes::ManilaTimesAdapter));
        registry.register(Box::new(rappler::RapplerAdapter));
        registry.register(Box::new(selector::SelectorAdapter::abs_cbn()));
        registry.register(Box::new(selector::SelectorAdapter::pna()));
        registry
    }

    /// Add a source. A source whose id is already registered replaces the old one
    /// in place.
    pub fn register(&mut self, adapter: Box<dyn SourceAdapter>) {
        match self.adapters.iter().position(|a| a.id() == adapter.id()) {
            Some(pos) => self.adapters[pos] = adapter,
            None => self.adapters.push(adapter),
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn SourceAdapter> {
        self.adapters
            .iter()
            .find(|a| a.id() == id)
            .map(|a| a.as_ref())
    }

    pub fn adapters(&self) -> impl Iterator<Item = &dyn SourceAdapter> {
        self.adapters.iter().map(|a| a.as_ref())
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.adapters.iter().map(|a| a.id()).collect()
    }

    /// Turn a user selection into source ids.
    ///
    /// Each entry is either a 1-based number into [`Self::ids`] or a source id.
    /// Entries that match nothing are dropped. An empty selection means every
    /// source.
    pub fn resolve_selection<S: AsRef<str>>(&self, selection: &[S]) -> Vec<&'static str> {
        if selection.is_empty() {
            return self.ids();
        }

        selection
            .iter()
            .filter_map(|entry| {
                let entry = entry.as_ref().trim();
                let found = match entry.parse::<usize>() {
                    Ok(n) => n.checked_sub(1).and_then(|i| self.adapters.get(i)),
                    Err(_) => self.adapters.iter().find(|a| a.id() == entry),
                };
                if found.is_none() {
                    debug!(entry, "Ignoring unknown source selection");
                }
                found.map(|a| a.id())
            })
            .collect()
    }

    /// Scrape the requested sources and concatenate their articles in request order.
    ///
    /// Unknown ids are ignored. Pages are fetched concurrently, but the result
    /// order is the same as scraping them one after the other.
    #[instrument(level = "info", skip(self, fetcher, ids), fields(requested = ids.len()))]
    pub async fn dispatch<F, S>(&self, fetcher: &F, ids: &[S]) -> Vec<Article>
    where
        F: Fetcher,
        S: AsRef<str>,
    {
        let scrapes = ids.iter().filter_map(|id| {
            let id = id.as_ref();
            match self.get(id) {
                Some(adapter) => Some(scrape_source(adapter, fetcher)),
                None => {
                    debug!(source = id, "Unknown source id; skipping");
                    None
                }
            }
        });

        let articles: Vec<Article> = join_all(scrapes).await.into_iter().flatten().collect();
        info!(count = articles.len(), "Collected articles");
        articles
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_default_sources()
    }
}

/// Fetch and parse one source. Any failure is logged and gives an empty list.
#[instrument(level = "info", skip_all, fields(source = adapter.id()))]
pub async fn scrape_source<F: Fetcher>(adapter: &dyn SourceAdapter, fetcher: &F) -> Vec<Article> {
    let body = match fetcher.fetch(adapter.url(), adapter.headers()).await {
        Ok(body) => body,
        Err(e) => {
            warn!(url = adapter.url(), error = %e, "Fetch failed; no articles from this source");
            return Vec::new();
        }
    };

    let document = Html::parse_document(&body);
    let articles: Vec<Article> = adapter
        .extract(&document)
        .into_iter()
        .map(|article| article.with_source(adapter.id()))
        .collect();

    if articles.is_empty() {
        warn!(url = adapter.url(), "No headlines found; the page structure may have changed");
    } else {
        info!(count = articles.len(), "Scraped headlines");
    }
    articles
}

/// Parse a selector that is known at compile time.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// All text below `element`, whitespace-collapsed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}
