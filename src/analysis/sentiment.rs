//! Sentiment scoring and aggregation.
//!
//! Polarity itself comes from a lexicon scorer behind [`PolarityScorer`]; this
//! module only decides how a compound score is classified and how a corpus
//! is summarized.
//!
//! # Thresholds
//!
//! | compound | article label | corpus verdict (on the mean) |
//! |----------|---------------|------------------------------|
//! | `>= 0.05` | Positive | Mostly Positive |
//! | `<= -0.05` | Negative | Mostly Negative |
//! | otherwise | Neutral | Neutral |
//!
//! The corpus verdict is taken from the mean compound score, not from a
//! majority of article labels.

use std::fmt;
use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::{AnalyzerError, Result};
use crate::models::{Article, OverallSentiment, SentimentLabel, SentimentScores, SentimentSummary};

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// A lexicon-based polarity scorer.
pub trait PolarityScorer {
    fn polarity_scores(&self, text: &str) -> SentimentScores;
}

/// [`PolarityScorer`] backed by the VADER lexicon.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        SentimentScores {
            negative: get("neg"),
            neutral: get("neu"),
            positive: get("pos"),
            compound: get("compound"),
        }
    }
}

/// Score one article's analysis text.
pub fn score_article<S: PolarityScorer + ?Sized>(scorer: &S, article: &Article) -> SentimentScores {
    scorer.polarity_scores(article.analysis_text())
}

pub fn classify(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

pub fn overall(mean_compound: f64) -> OverallSentiment {
    match classify(mean_compound) {
        SentimentLabel::Positive => OverallSentiment::MostlyPositive,
        SentimentLabel::Negative => OverallSentiment::MostlyNegative,
        SentimentLabel::Neutral => OverallSentiment::Neutral,
    }
}

/// Tally labels and derive the verdict from a list of compound scores.
///
/// # Errors
///
/// [`AnalyzerError::EmptyCorpus`] when `compounds` is empty; there is no mean
/// to classify.
pub fn summarize(compounds: &[f64]) -> Result<SentimentSummary> {
    if compounds.is_empty() {
        return Err(AnalyzerError::EmptyCorpus {
            analysis: "sentiment analysis",
        });
    }

    let (mut positive_count, mut negative_count, mut neutral_count) = (0, 0, 0);
    for &compound in compounds {
        match classify(compound) {
            SentimentLabel::Positive => positive_count += 1,
            SentimentLabel::Negative => negative_count += 1,
            SentimentLabel::Neutral => neutral_count += 1,
        }
    }

    let mean_compound = compounds.iter().sum::<f64>() / compounds.len() as f64;
    debug!(
        positive_count,
        negative_count,
        neutral_count,
        mean_compound,
        "Summarized sentiment"
    );

    Ok(SentimentSummary {
        positive_count,
        negative_count,
        neutral_count,
        mean_compound,
        overall_label: overall(mean_compound),
    })
}

/// Score every article and summarize the corpus.
pub fn aggregate<S: PolarityScorer + ?Sized>(scorer: &S, corpus: &[Article]) -> Result<SentimentSummary> {
    let compounds: Vec<f64> = corpus
        .iter()
        .map(|article| score_article(scorer, article).compound)
        .collect();
    summarize(&compounds)
}
