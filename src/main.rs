//! # News Analyzer
//!
//! Scrapes headlines from several Philippine and international news sites,
//! normalizes them into one [`Article`](models::Article) shape, and runs
//! simple text analytics over them.
//!
//! ## Features
//!
//! - Per-site adapters for Inquirer, BBC News, Philstar, The Manila Times,
//!   Rappler, ABS-CBN News and the Philippine News Agency
//! - Keyword frequency ranking for one article or the whole corpus
//! - VADER sentiment per article and an overall verdict for the corpus
//! - Word-frequency output for word clouds and a terminal bar chart
//! - JSON reports with every article, its sentiment, and the top keywords
//!
//! ## Usage
//!
//! ```sh
//! news_analyzer sources
//! news_analyzer --sources 1,2 headlines
//! news_analyzer --sources 1,2 sentiment --article 3
//! news_analyzer --sources rappler keywords -k 5 --chart
//! news_analyzer report -o ./reports
//! ```
//!
//! ## Architecture
//!
//! 1. **Selection**: Resolve `--sources` (numbers or ids) against the registry
//! 2. **Scraping**: Fetch each selected homepage and run its adapter
//! 3. **Analysis**: Keywords and sentiment over the session corpus
//! 4. **Output**: Plain text on stdout, or a JSON report on disk

use chrono::Local;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cli;
mod config;
mod error;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod session;
mod utils;

use analysis::sentiment::VaderScorer;
use cli::{Cli, Command};
use config::AnalyzerConfig;
use error::Result;
use fetch::HttpFetcher;
use outputs::{console, json};
use scrapers::SourceRegistry;
use session::Session;

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let start_time = std::time::Instant::now();
    let outcome = run(args).await;
    info!(elapsed_ms = start_time.elapsed().as_millis() as u64, "Execution complete");

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[instrument(level = "info", skip_all, fields(command = ?args.command))]
async fn run(args: Cli) -> Result<()> {
    let config = AnalyzerConfig::load(&args)?;
    let registry = SourceRegistry::with_default_sources();
    let scorer = VaderScorer::new();

    match args.command {
        Command::Sources => {
            print!("{}", console::sources_list(&registry));
        }
        Command::Headlines => {
            let (_, session) = scrape(&registry, &config).await?;
            println!("Scraped {} articles.", session.len());
            print!("{}", console::headline_list(session.corpus()));
        }
        Command::Sentiment { article } => {
            let (_, session) = scrape(&registry, &config).await?;
            let scores = session.article_sentiment(article, &scorer)?;
            print!("{}", console::article_sentiment(session.article(article)?, &scores));
        }
        Command::Overall => {
            let (_, session) = scrape(&registry, &config).await?;
            let summary = session.overall_sentiment(&scorer)?;
            print!("{}", console::sentiment_summary(&summary));
        }
        Command::Keywords { article, k, chart } => {
            let (_, session) = scrape(&registry, &config).await?;
            let k = k.unwrap_or(config.top_k);
            let keywords = match article {
                Some(index) => session.article_keywords(index, k)?,
                None => session.corpus_keywords(k)?,
            };
            if chart {
                print!("{}", console::bar_chart(&keywords));
            } else {
                print!("{}", console::keyword_list(&keywords));
            }
        }
        Command::Wordcloud { article, limit } => {
            let (_, session) = scrape(&registry, &config).await?;
            let mut frequencies = match article {
                Some(index) => session.article_word_frequencies(index)?,
                None => session.corpus_word_frequencies()?,
            };
            frequencies.truncate(limit);
            print!("{}", console::keyword_list(&frequencies));
        }
        Command::Report { output_dir } => {
            let (selected, session) = scrape(&registry, &config).await?;
            let generated_at = Local::now();
            let report = json::build_report(&session, &selected, &scorer, config.top_k, generated_at);
            let path = json::write_report(&report, &output_dir, generated_at).await?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Scrape the configured selection into a fresh session.
async fn scrape(registry: &SourceRegistry, config: &AnalyzerConfig) -> Result<(Vec<&'static str>, Session)> {
    let selected = registry.resolve_selection(&config.sources);
    info!(sources = ?selected, "Scraping sources");
    let fetcher = HttpFetcher::from_config(config)?;
    let mut session = Session::new();
    let count = session.populate(registry, &fetcher, &selected).await;
    info!(count, "Scraped articles");
    Ok((selected, session))
}
