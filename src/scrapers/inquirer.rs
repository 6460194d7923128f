//! Philippine Daily Inquirer scraper.
//!
//! Scrapes the [Inquirer news homepage](https://newsinfo.inquirer.net). The
//! site blocks non-browser user agents; the configured default is a desktop
//! browser one.
//!
//! # Headline Patterns
//!
//! - `h6 > a`: the headline list. Anchor text is the headline and its `href`
//!   (resolved against the site URL) becomes the article link. An `h6`
//!   without an anchor is not a headline and is skipped.
//! - `h2.article-title`: featured stories. The first `p` after the heading,
//!   either a sibling or inside a sibling wrapper, is taken as the summary.
//!   The search stops at the next heading.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{SourceAdapter, element_text, selector};
use crate::models::Article;

const INQUIRER_URL: &str = "https://newsinfo.inquirer.net";

static HEADLINE_NODES: Lazy<Selector> = Lazy::new(|| selector("h6, h2.article-title"));
static ANCHOR: Lazy<Selector> = Lazy::new(|| selector("a"));
static PARAGRAPH_OR_HEADING: Lazy<Selector> = Lazy::new(|| selector("p, h1, h2, h3, h4, h5, h6"));

#[derive(Debug, Clone, Copy, Default)]
pub struct InquirerAdapter;

impl SourceAdapter for InquirerAdapter {
    fn id(&self) -> &'static str {
        "inquirer"
    }

    fn url(&self) -> &'static str {
        INQUIRER_URL
    }

    fn extract(&self, document: &Html) -> Vec<Article> {
        let base = Url::parse(INQUIRER_URL).ok();

        document
            .select(&HEADLINE_NODES)
            .filter_map(|node| match node.value().name() {
                "h6" => linked_headline(node, base.as_ref()),
                _ => featured_headline(node),
            })
            .collect()
    }
}

fn linked_headline(node: ElementRef<'_>, base: Option<&Url>) -> Option<Article> {
    let anchor = node.select(&ANCHOR).next()?;
    let link = anchor.value().attr("href").map(|href| resolve(base, href));
    Some(Article::new(element_text(anchor))?.with_link(link))
}

fn featured_headline(node: ElementRef<'_>) -> Option<Article> {
    Some(Article::new(element_text(node))?.with_summary(featured_summary(node)))
}

fn featured_summary(node: ElementRef<'_>) -> Option<String> {
    for sibling in node.next_siblings().filter_map(ElementRef::wrap) {
        match sibling.value().name() {
            "p" => return Some(element_text(sibling)),
            tag if is_heading(tag) => return None,
            _ => {}
        }
        // Wrapper element: its first paragraph counts unless a heading comes first
        if let Some(inner) = sibling.select(&PARAGRAPH_OR_HEADING).next() {
            if inner.value().name() == "p" {
                return Some(element_text(inner));
            }
            return None;
        }
    }
    None
}

fn is_heading(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

fn resolve(base: Option<&Url>, href: &str) -> String {
    base.and_then(|b| b.join(href).ok())
        .map(|u| u.to_string())
        .unwrap_or_else(|| href.to_string())
}
