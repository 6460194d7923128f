//! Plain-text rendering for the terminal.
//!
//! Every function returns a `String` so the command layer decides where it
//! goes and tests can compare it directly.

use std::fmt::Write;

use crate::models::{Article, Keyword, SentimentScores, SentimentSummary};
use crate::scrapers::SourceRegistry;

const BAR_WIDTH: usize = 40;

/// Known sources with the numbers accepted by `--sources`.
pub fn sources_list(registry: &SourceRegistry) -> String {
    let mut out = String::new();
    for (i, adapter) in registry.adapters().enumerate() {
        writeln!(out, "{:>2}. {:<12} {}", i + 1, adapter.id(), adapter.url()).unwrap();
    }
    out
}

/// Numbered headlines, 1-based.
pub fn headline_list(articles: &[Article]) -> String {
    let mut out = String::new();
    for (i, article) in articles.iter().enumerate() {
        write!(out, "{:>3}. {}", i + 1, article.headline()).unwrap();
        if let Some(source) = article.source_id() {
            write!(out, " [{source}]").unwrap();
        }
        out.push('\n');
    }
    out
}

pub fn keyword_list(keywords: &[Keyword]) -> String {
    let mut out = String::new();
    for keyword in keywords {
        writeln!(out, "{:<20} {}", keyword.token, keyword.count).unwrap();
    }
    out
}

/// Horizontal bar chart, bars scaled so the top count fills [`BAR_WIDTH`].
pub fn bar_chart(keywords: &[Keyword]) -> String {
    let Some(max) = keywords.iter().map(|k| k.count).max().filter(|&m| m > 0) else {
        return String::new();
    };
    let label_width = keywords.iter().map(|k| k.token.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for keyword in keywords {
        let len = (keyword.count * BAR_WIDTH).div_ceil(max);
        writeln!(
            out,
            "{:<width$} | {} {}",
            keyword.token,
            "█".repeat(len),
            keyword.count,
            width = label_width
        )
        .unwrap();
    }
    out
}

pub fn article_sentiment(article: &Article, scores: &SentimentScores) -> String {
    let mut out = format!("{}\n", article.analysis_text());
    if let Some(link) = article.link() {
        writeln!(out, "{link}").unwrap();
    }
    writeln!(out, "Sentiment Analysis: {scores}").unwrap();
    out
}

pub fn sentiment_summary(summary: &SentimentSummary) -> String {
    format!(
        "Articles analyzed: {}\nPositive articles: {}\nNegative articles: {}\nNeutral articles: {}\nOverall Sentiment: {}\n",
        summary.total(),
        summary.positive_count,
        summary.negative_count,
        summary.neutral_count,
        summary.overall_label
    )
}
