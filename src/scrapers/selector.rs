//! Selector-driven scraper shared by sites whose homepage headlines are plain
//! anchors matched by one CSS selector.
//!
//! Used for Philstar, ABS-CBN News and the Philippine News Agency. Each match
//! contributes its text as the headline; no summary or link is taken.

use scraper::{Html, Selector};

use super::{SourceAdapter, element_text, selector};
use crate::models::Article;

pub struct SelectorAdapter {
    id: &'static str,
    url: &'static str,
    headlines: Selector,
}

impl SelectorAdapter {
    pub fn new(id: &'static str, url: &'static str, css: &str) -> Self {
        Self {
            id,
            url,
            headlines: selector(css),
        }
    }

    pub fn philstar() -> Self {
        Self::new("philstar", "https://www.philstar.com", "h2.title a")
    }

    pub fn abs_cbn() -> Self {
        Self::new("abscbn", "https://news.abs-cbn.com", "div.news-title a")
    }

    pub fn pna() -> Self {
        Self::new("pna", "https://www.pna.gov.ph", "div.post-content h1 a")
    }
}

impl SourceAdapter for SelectorAdapter {
    fn id(&self) -> &'static str {
        self.id
    }

    fn url(&self) -> &'static str {
        self.url
    }

    fn extract(&self, document: &Html) -> Vec<Article> {
        document
            .select(&self.headlines)
            .filter_map(|node| Article::new(element_text(node)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::test_support::headlines;

    #[test]
    fn test_philstar() {
        let document = Html::parse_document(
            r#"<h2 class="title"><a href="/1">Senate opens probe</a></h2>
               <h2 class="subtitle"><a href="/2">Wrong class</a></h2>
               <h2 class="title"><a href="/3"></a></h2>
               <h2 class="title big"><a href="/4">Peso slides vs dollar</a></h2>"#,
        );
        let articles = SelectorAdapter::philstar().extract(&document);
        assert_eq!(headlines(&articles), vec!["Senate opens probe", "Peso slides vs dollar"]);
    }

    #[test]
    fn test_abs_cbn() {
        let document = Html::parse_document(
            r#"<div class="news-title"><a>Quake jolts Batangas</a></div>
               <div class="news-title">No anchor</div>"#,
        );
        let articles = SelectorAdapter::abs_cbn().extract(&document);
        assert_eq!(headlines(&articles), vec!["Quake jolts Batangas"]);
    }

    #[test]
    fn test_pna() {
        let document = Html::parse_document(
            r#"<div class="post-content"><h1><a>DOH logs new cases</a></h1></div>
               <h1><a>Outside post content</a></h1>"#,
        );
        let articles = SelectorAdapter::pna().extract(&document);
        assert_eq!(headlines(&articles), vec!["DOH logs new cases"]);
    }

    #[test]
    fn test_ids_and_urls() {
        assert_eq!(SelectorAdapter::philstar().id(), "philstar");
        assert_eq!(SelectorAdapter::abs_cbn().url(), "https://news.abs-cbn.com");
        assert_eq!(SelectorAdapter::pna().id(), "pna");
    }
}
