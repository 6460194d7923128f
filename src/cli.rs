//! Command-line interface definitions for the news analyzer.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Global options can also be supplied through a YAML config file (see
//! [`crate::config`]); flags given here win over the file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the news analyzer.
///
/// # Examples
///
/// ```sh
/// # List the known sources with their numbers
/// news_analyzer sources
///
/// # Scrape sources 1 and 3 and show the overall sentiment
/// news_analyzer --sources 1,3 overall
///
/// # Keywords for the second scraped headline
/// news_analyzer --sources bbc keywords --article 2
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "NEWS_ANALYZER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Sources to scrape, comma separated: 1-based numbers from `sources` or source ids
    #[arg(short, long, value_delimiter = ',', global = true)]
    pub sources: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent to every source
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the known sources and their numbers
    Sources,
    /// Scrape and print the numbered headlines
    Headlines,
    /// Sentiment scores for one article
    Sentiment {
        /// 1-based article number as printed by `headlines`
        #[arg(short, long)]
        article: usize,
    },
    /// Positive/negative/neutral tally and overall verdict for all articles
    Overall,
    /// Most frequent keywords, for one article or for all of them
    Keywords {
        /// 1-based article number; omit to use every article
        #[arg(short, long)]
        article: Option<usize>,
        /// Number of keywords to show (defaults to `top_k` from the config)
        #[arg(short)]
        k: Option<usize>,
        /// Draw a bar chart of the counts
        #[arg(long)]
        chart: bool,
    },
    /// Word frequencies that feed a word cloud
    Wordcloud {
        /// 1-based article number; omit to use every article
        #[arg(short, long)]
        article: Option<usize>,
        /// Maximum number of words to print
        #[arg(short, long, default_value_t = 50)]
        limit: usize,
    },
    /// Scrape, analyze everything, and write a JSON report
    Report {
        /// Directory receiving `<date>/report-<time>.json`
        #[arg(short, long)]
        output_dir: String,
    },
}
