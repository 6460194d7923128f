//! Error types for the analyzer.
//!
//! Fetch and markup failures are recovered inside the scrapers and never
//! reach the caller; the variants that do surface are the ones a user can act
//! on (an empty selection, a bad article number, an unreadable config file).

use thiserror::Error;

/// Errors produced while fetching, configuring, or analyzing.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Transport failure, including a per-request timeout.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} returned status {status}")]
    HttpStatus {
        /// The requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// An analysis that needs at least one article was run on an empty corpus.
    #[error("no articles available for {analysis}")]
    EmptyCorpus {
        /// Human readable name of the analysis
        analysis: &'static str,
    },

    /// A 1-based article number outside the displayed list.
    #[error("article {index} does not exist (choose 1 to {len})")]
    InvalidArticleIndex {
        /// The number the user asked for
        index: usize,
        /// Number of articles in the corpus
        len: usize,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
