//! One scrape-and-analyze session.
//!
//! A [`Session`] owns the corpus for its lifetime: it is created empty,
//! filled by [`Session::populate`], read by any number of analyses, and
//! dropped. Populating again replaces the corpus.
//!
//! Article numbers are 1-based, matching the numbered list printed by the
//! `headlines` command.

use tracing::info;

use crate::analysis::keywords::{self, corpus_word_frequencies, top_corpus_keywords};
use crate::analysis::sentiment::{self, PolarityScorer};
use crate::error::{AnalyzerError, Result};
use crate::fetch::Fetcher;
use crate::models::{Article, Keyword, SentimentScores, SentimentSummary};
use crate::scrapers::SourceRegistry;

#[derive(Debug, Default)]
pub struct Session {
    corpus: Vec<Article>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_articles(corpus: Vec<Article>) -> Self {
        Self { corpus }
    }

    /// Scrape `source_ids` and make the result the session's corpus.
    ///
    /// Returns the number of articles collected.
    pub async fn populate<F, S>(&mut self, registry: &SourceRegistry, fetcher: &F, source_ids: &[S]) -> usize
    where
        F: Fetcher,
        S: AsRef<str>,
    {
        self.corpus = registry.dispatch(fetcher, source_ids).await;
        info!(count = self.corpus.len(), "Session corpus replaced");
        self.corpus.len()
    }

    pub fn corpus(&self) -> &[Article] {
        &self.corpus
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// The article shown as number `index` (1-based).
    pub fn article(&self, index: usize) -> Result<&Article> {
        index
            .checked_sub(1)
            .and_then(|i| self.corpus.get(i))
            .ok_or(AnalyzerError::InvalidArticleIndex {
                index,
                len: self.corpus.len(),
            })
    }

    pub fn article_sentiment<S: PolarityScorer + ?Sized>(&self, index: usize, scorer: &S) -> Result<SentimentScores> {
        Ok(sentiment::score_article(scorer, self.article(index)?))
    }

    pub fn article_keywords(&self, index: usize, k: usize) -> Result<Vec<Keyword>> {
        Ok(keywords::top_keywords(self.article(index)?.analysis_text(), k))
    }

    pub fn article_word_frequencies(&self, index: usize) -> Result<Vec<Keyword>> {
        Ok(keywords::word_frequencies(self.article(index)?.analysis_text()))
    }

    pub fn corpus_keywords(&self, k: usize) -> Result<Vec<Keyword>> {
        Ok(top_corpus_keywords(self.require_articles("keyword extraction")?, k))
    }

    pub fn corpus_word_frequencies(&self) -> Result<Vec<Keyword>> {
        Ok(corpus_word_frequencies(self.require_articles("word cloud generation")?))
    }

    pub fn overall_sentiment<S: PolarityScorer + ?Sized>(&self, scorer: &S) -> Result<SentimentSummary> {
        sentiment::aggregate(scorer, self.require_articles("sentiment analysis")?)
    }

    fn require_articles(&self, analysis: &'static str) -> Result<&[Article]> {
        if self.is_empty() {
            return Err(AnalyzerError::EmptyCorpus { analysis });
        }
        Ok(&self.corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sentiment::VaderScorer;
    use crate::models::OverallSentiment;
    use crate::scrapers::test_support::FixtureFetcher;

    fn session() -> Session {
        Session::from_articles(vec![
            Article::new("Storm hits capital").unwrap(),
            Article::new("Markets rally on good news")
                .unwrap()
                .with_summary(Some("Stocks surge as investors cheer strong growth".to_string())),
        ])
    }

    #[test]
    fn test_article_is_one_based() {
        let session = session();
        assert_eq!(session.article(1).unwrap().headline(), "Storm hits capital");
        assert_eq!(session.article(2).unwrap().headline(), "Markets rally on good news");
    }

    #[test]
    fn test_out_of_range_article() {
        let session = session();
        for index in [0, 3, usize::MAX] {
            let err = session.article(index).unwrap_err();
            assert!(matches!(
                err,
                AnalyzerError::InvalidArticleIndex { len: 2, .. }
            ));
        }
        assert!(session.article_keywords(3, 10).is_err());
        assert!(session.article_sentiment(0, &VaderScorer::new()).is_err());
    }

    #[test]
    fn test_article_keywords_use_summary() {
        let keywords = session().article_keywords(2, 3).unwrap();
        let tokens: Vec<&str> = keywords.iter().map(|k| k.token.as_str()).collect();
        assert_eq!(tokens, vec!["stocks", "surge", "investors"]);
    }

    #[test]
    fn test_article_word_frequencies_use_headline_without_summary() {
        let freqs = session().article_word_frequencies(1).unwrap();
        let tokens: Vec<&str> = freqs.iter().map(|k| k.token.as_str()).collect();
        assert_eq!(tokens, vec!["storm", "hits", "capital"]);
    }

    #[test]
    fn test_corpus_operations_on_empty_session() {
        let empty = Session::new();
        assert!(empty.is_empty());
        assert!(matches!(
            empty.corpus_keywords(10),
            Err(AnalyzerError::EmptyCorpus { analysis: "keyword extraction" })
        ));
        assert!(matches!(
            empty.corpus_word_frequencies(),
            Err(AnalyzerError::EmptyCorpus { .. })
        ));
        assert!(matches!(
            empty.overall_sentiment(&VaderScorer::new()),
            Err(AnalyzerError::EmptyCorpus { analysis: "sentiment analysis" })
        ));
    }

    #[test]
    fn test_overall_sentiment_counts_every_article() {
        let session = session();
        let summary = session.overall_sentiment(&VaderScorer::new()).unwrap();
        assert_eq!(summary.total(), session.len());
        assert_ne!(summary.overall_label, OverallSentiment::MostlyNegative);
    }

    #[tokio::test]
    async fn test_populate_replaces_corpus() {
        let registry = SourceRegistry::with_default_sources();
        let fetcher = FixtureFetcher::default()
            .with_page("https://www.bbc.com/news", "<h2>One</h2><h2>Two</h2>")
            .with_page(
                "https://www.rappler.com",
                r#"<h3><a href="/x">Three</a></h3>"#,
            );

        let mut session = session();
        assert_eq!(session.populate(&registry, &fetcher, &["bbc"]).await, 2);
        assert_eq!(session.article(1).unwrap().headline(), "One");

        assert_eq!(session.populate(&registry, &fetcher, &["rappler"]).await, 1);
        assert_eq!(session.len(), 1);
        assert_eq!(session.article(1).unwrap().source_id(), Some("rappler"));
    }
}
