//! Data models shared by the scrapers and the analytics.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Article`]: One normalized headline record produced by a source adapter
//! - [`SentimentScores`]: Polarity components for a single piece of text
//! - [`SentimentSummary`]: Tally and overall verdict over a whole corpus
//! - [`AnalysisReport`]: Everything the `report` command writes to disk

use serde::Serialize;
use std::fmt;

/// A headline scraped from a news source.
///
/// Articles are only built by source adapters and are immutable afterwards.
/// The headline is guaranteed non-empty and trimmed; [`Article::new`] refuses
/// to build a record otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    headline: String,
    summary: Option<String>,
    link: Option<String>,
    source_id: Option<String>,
}

impl Article {
    /// Build an article from a raw headline.
    ///
    /// Returns `None` when the headline is empty after trimming, so adapters
    /// can skip the node with `?` or `filter_map`.
    pub fn new(headline: impl AsRef<str>) -> Option<Self> {
        let headline = headline.as_ref().trim();
        if headline.is_empty() {
            return None;
        }
        Some(Self {
            headline: headline.to_string(),
            summary: None,
            link: None,
            source_id: None,
        })
    }

    /// Attach a summary. Whitespace-only summaries count as absent.
    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub fn with_source(mut self, source_id: &str) -> Self {
        self.source_id = Some(source_id.to_string());
        self
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// The text every analysis runs on: the summary when present and
    /// non-empty, otherwise the headline.
    pub fn analysis_text(&self) -> &str {
        match self.summary.as_deref() {
            Some(summary) if !summary.is_empty() => summary,
            _ => &self.headline,
        }
    }
}

/// Polarity components for one piece of text, as returned by the lexicon scorer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentimentScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    /// Normalized composite in `-1.0..=1.0`.
    pub compound: f64,
}

impl fmt::Display for SentimentScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "neg: {:.3}, neu: {:.3}, pos: {:.3}, compound: {:.4}",
            self.negative, self.neutral, self.positive, self.compound
        )
    }
}

/// Per-article classification of a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        })
    }
}

/// Verdict for a whole corpus, derived from the mean compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallSentiment {
    #[serde(rename = "Mostly Positive")]
    MostlyPositive,
    #[serde(rename = "Mostly Negative")]
    MostlyNegative,
    Neutral,
}

impl fmt::Display for OverallSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OverallSentiment::MostlyPositive => "Mostly Positive",
            OverallSentiment::MostlyNegative => "Mostly Negative",
            OverallSentiment::Neutral => "Neutral",
        })
    }
}

/// Sentiment tally across a corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub mean_compound: f64,
    pub overall_label: OverallSentiment,
}

impl SentimentSummary {
    pub fn total(&self) -> usize {
        self.positive_count + self.negative_count + self.neutral_count
    }
}

/// A ranked keyword and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub token: String,
    pub count: usize,
}

/// One article together with its sentiment, as written in a report.
#[derive(Debug, Serialize)]
pub struct ScoredArticle<'a> {
    #[serde(flatten)]
    pub article: &'a Article,
    pub sentiment: SentimentScores,
    pub label: SentimentLabel,
}

/// Full output of the `report` command.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    /// Local timestamp in RFC 3339 format.
    pub generated_at: String,
    pub sources: Vec<String>,
    pub articles: Vec<ScoredArticle<'a>>,
    pub top_keywords: Vec<Keyword>,
    /// Absent when no article was scraped.
    pub sentiment: Option<SentimentSummary>,
}
