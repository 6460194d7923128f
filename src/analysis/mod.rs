//! Text analytics over scraped articles.
//!
//! - [`text`]: normalization into clean tokens
//! - [`keywords`]: frequency ranking for one text or a whole corpus
//! - [`sentiment`]: per-article polarity and corpus-wide verdict
//!
//! Single-article analyses always run on [`Article::analysis_text`]
//! (summary, else headline).
//!
//! [`Article::analysis_text`]: crate::models::Article::analysis_text

pub mod keywords;
pub mod sentiment;
pub mod text;
