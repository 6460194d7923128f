//! JSON report generation.
//!
//! A report captures one session: which sources were asked for, every
//! article with its sentiment, the top keywords and the overall verdict.
//!
//! # Output Path
//!
//! `{output_dir}/{YYYY-MM-DD}/report-{HHMMSS}.json`, using local time.

use chrono::{DateTime, Local};
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument};

use crate::analysis::keywords::top_corpus_keywords;
use crate::analysis::sentiment::{self, PolarityScorer};
use crate::error::Result;
use crate::models::{AnalysisReport, ScoredArticle};
use crate::session::Session;
use crate::utils::ensure_writable_dir;

/// Analyze every article of `session` into a report.
///
/// An empty session still produces a report, with no sentiment summary.
pub fn build_report<'a, S: PolarityScorer + ?Sized>(
    session: &'a Session,
    sources: &[&str],
    scorer: &S,
    top_k: usize,
    generated_at: DateTime<Local>,
) -> AnalysisReport<'a> {
    let articles: Vec<ScoredArticle<'a>> = session
        .corpus()
        .iter()
        .map(|article| {
            let scores = sentiment::score_article(scorer, article);
            ScoredArticle {
                article,
                sentiment: scores,
                label: sentiment::classify(scores.compound),
            }
        })
        .collect();

    let compounds: Vec<f64> = articles.iter().map(|a| a.sentiment.compound).collect();

    AnalysisReport {
        generated_at: generated_at.to_rfc3339(),
        sources: sources.iter().map(|s| s.to_string()).collect(),
        top_keywords: top_corpus_keywords(session.corpus(), top_k),
        sentiment: sentiment::summarize(&compounds).ok(),
        articles,
    }
}

/// Write `report` below `output_dir`, returning the file path.
#[instrument(level = "info", skip(report))]
pub async fn write_report(
    report: &AnalysisReport<'_>,
    output_dir: &str,
    generated_at: DateTime<Local>,
) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(report)?;

    let day_dir = format!(
        "{}/{}",
        output_dir.trim_end_matches('/'),
        generated_at.format("%Y-%m-%d")
    );
    ensure_writable_dir(&day_dir).await?;

    let path = PathBuf::from(&day_dir).join(format!("report-{}.json", generated_at.format("%H%M%S")));
    info!(path = %path.display(), "Writing JSON report");
    fs::write(&path, json).await?;
    info!(path = %path.display(), articles = report.articles.len(), "Wrote JSON report");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sentiment::VaderScorer;
    use crate::models::Article;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 5, 6, 8, 15, 12).unwrap()
    }

    fn session() -> Session {
        Session::from_articles(vec![
            Article::new("Storm hits capital").unwrap().with_source("bbc"),
            Article::new("Markets rally on good news")
                .unwrap()
                .with_summary(Some("Investors cheer strong growth".to_string()))
                .with_link(Some("https://newsinfo.inquirer.net/1".to_string()))
                .with_source("inquirer"),
        ])
    }

    #[test]
    fn test_build_report() {
        let session = session();
        let report = build_report(&session, &["bbc", "inquirer"], &VaderScorer::new(), 3, fixed_time());

        assert_eq!(report.sources, vec!["bbc", "inquirer"]);
        assert_eq!(report.articles.len(), 2);
        assert_eq!(report.top_keywords.len(), 3);
        assert_eq!(report.top_keywords[0].token, "storm");
        let summary = report.sentiment.as_ref().unwrap();
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn test_empty_session_report_has_no_summary() {
        let session = Session::new();
        let report = build_report(&session, &[], &VaderScorer::new(), 10, fixed_time());
        assert!(report.articles.is_empty());
        assert!(report.top_keywords.is_empty());
        assert!(report.sentiment.is_none());
    }

    #[tokio::test]
    async fn test_write_report() {
        let tmp = tempfile::tempdir().unwrap();
        let session = session();
        let report = build_report(&session, &["bbc"], &VaderScorer::new(), 5, fixed_time());

        let path = write_report(&report, tmp.path().to_str().unwrap(), fixed_time())
            .await
            .unwrap();
        assert_eq!(path, tmp.path().join("2025-05-06").join("report-081512.json"));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["articles"][1]["headline"], "Markets rally on good news");
        assert_eq!(written["articles"][1]["summary"], "Investors cheer strong growth");
        assert_eq!(written["articles"][1]["source_id"], "inquirer");
        assert!(written["articles"][0]["sentiment"]["compound"].is_number());
        assert!(written["articles"][0]["label"].is_string());
        assert!(written["sentiment"]["overall_label"].is_string());
        assert!(written["generated_at"].as_str().unwrap().starts_with("2025-05-06T08:15:12"));
    }
}
