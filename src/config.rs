//! Runtime configuration.
//!
//! Settings come from three layers, highest priority first: command-line
//! flags, an optional YAML file, and the built-in defaults below.
//!
//! ```yaml
//! timeout_secs: 10
//! top_k: 15
//! sources: [inquirer, 2, rappler]
//! ```

use serde::{Deserialize, Deserializer};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::cli::Cli;
use crate::error::{AnalyzerError, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Per-request timeout; a source that exceeds it contributes no articles.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Number of keywords shown by `keywords` and stored in reports.
    pub top_k: usize,
    /// Default selection, as source ids or 1-based indices. Empty means all.
    #[serde(deserialize_with = "source_entries")]
    pub sources: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            top_k: DEFAULT_TOP_K,
            sources: Vec::new(),
        }
    }
}

/// Accept `[bbc, 3]` as well as `[bbc, "3"]`; numbers become their decimal text.
fn source_entries<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Index(u64),
        Id(String),
    }

    let entries = Vec::<Entry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            Entry::Index(n) => n.to_string(),
            Entry::Id(id) => id,
        })
        .collect())
}

impl AnalyzerConfig {
    /// Read a YAML config file. Keys left out keep their defaults.
    #[instrument(level = "debug")]
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a map
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file named on the command line (if any) and apply flag overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(timeout) = cli.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(ua) = &cli.user_agent {
            config.user_agent = ua.clone();
        }
        if !cli.sources.is_empty() {
            config.sources = cli.sources.clone();
        }

        config.validate()?;
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(AnalyzerError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(AnalyzerError::Config("user_agent must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.top_k, 10);
        assert!(config.sources.is_empty());
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AnalyzerConfig::from_yaml("top_k: 5\nsources: [bbc, \"3\"]\n").unwrap();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.sources, vec!["bbc", "3"]);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_unquoted_source_numbers() {
        let config = AnalyzerConfig::from_yaml("sources: [1, bbc, 3]").unwrap();
        assert_eq!(config.sources, vec!["1", "bbc", "3"]);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AnalyzerConfig::from_yaml("").unwrap(), AnalyzerConfig::default());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = AnalyzerConfig::from_yaml("timeout_secs: 0").unwrap_err();
        assert!(matches!(err, AnalyzerError::Config(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AnalyzerConfig::from_yaml("timeout: 3").unwrap_err();
        assert!(matches!(err, AnalyzerError::Yaml(_)));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: 30\ntop_k: 7\nsources: [bbc]").unwrap();

        let cli = Cli::parse_from([
            "news_analyzer",
            "--config",
            file.path().to_str().unwrap(),
            "--timeout-secs",
            "5",
            "--sources",
            "1,rappler",
            "headlines",
        ]);
        let config = AnalyzerConfig::load(&cli).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.top_k, 7);
        assert_eq!(config.sources, vec!["1", "rappler"]);
    }

    #[test]
    fn test_load_without_file() {
        let cli = Cli::parse_from(["news_analyzer", "headlines"]);
        assert_eq!(AnalyzerConfig::load(&cli).unwrap(), AnalyzerConfig::default());
    }
}
