//! Output generation for the terminal and for JSON reports.
//!
//! # Submodules
//!
//! - [`console`]: Plain-text rendering of headlines, keywords, bar charts and sentiment
//! - [`json`]: Builds and writes the [`AnalysisReport`](crate::models::AnalysisReport)
//!
//! # Report Layout
//!
//! ```text
//! output_dir/
//! └── 2025-05-06/
//!     ├── report-081512.json
//!     └── report-173004.json
//! ```

pub mod console;
pub mod json;
