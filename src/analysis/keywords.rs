//! Keyword ranking by frequency.
//!
//! Counts are ranked highest first. Equal counts keep the order in which the
//! tokens first appeared, so the ranking is fully determined by the input
//! text (and, for a corpus, by the article order).

use std::collections::HashMap;

use super::text::normalize;
use crate::models::{Article, Keyword};

/// Every distinct token with its count, ranked. This is the word-cloud input.
pub fn word_frequencies(text: &str) -> Vec<Keyword> {
    rank(&normalize(text))
}

/// The `k` most frequent tokens of `text`.
pub fn top_keywords(text: &str, k: usize) -> Vec<Keyword> {
    let mut ranked = word_frequencies(text);
    ranked.truncate(k);
    ranked
}

/// The `k` most frequent tokens across a corpus. Empty corpus, empty result.
pub fn top_corpus_keywords(corpus: &[Article], k: usize) -> Vec<Keyword> {
    top_keywords(&corpus_text(corpus), k)
}

pub fn corpus_word_frequencies(corpus: &[Article]) -> Vec<Keyword> {
    word_frequencies(&corpus_text(corpus))
}

/// Headline and summary of every article, joined into one text.
pub fn corpus_text(corpus: &[Article]) -> String {
    corpus
        .iter()
        .map(|article| format!("{} {}", article.headline(), article.summary().unwrap_or("")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn rank(tokens: &[String]) -> Vec<Keyword> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<Keyword> = Vec::new();

    for token in tokens {
        match slots.get(token.as_str()) {
            Some(&slot) => ranked[slot].count += 1,
            None => {
                slots.insert(token.as_str(), ranked.len());
                ranked.push(Keyword {
                    token: token.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable: ties stay in first-occurrence order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
