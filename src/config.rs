use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Ranked candidates requested per wanted result when filters follow ranking
const DEFAULT_OVERSAMPLE_FACTOR: usize = 3;
const DEFAULT_TOP_K: usize = 10;
const DEFAULT_MAX_RESULTS: usize = 20;
/// Collections at least this large get their corpus vectors computed on rayon
const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Tunables for a [`SearchEngine`](crate::SearchEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Multiplier applied to `max_results` before filters run.
    #[serde(default = "default_oversample_factor")]
    pub oversample_factor: usize,

    /// Result count used by callers that do not pick one.
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,

    #[serde(default = "default_max_results")]
    pub default_max_results: usize,

    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            oversample_factor: DEFAULT_OVERSAMPLE_FACTOR,
            default_top_k: DEFAULT_TOP_K,
            default_max_results: DEFAULT_MAX_RESULTS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

fn default_oversample_factor() -> usize {
    DEFAULT_OVERSAMPLE_FACTOR
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl SearchConfig {
    /// Read a TOML config file. Missing keys fall back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SearchError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| SearchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.oversample_factor == 0 {
            return Err(SearchError::Config(
                "oversample_factor must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = SearchConfig::from_toml_str("").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.oversample_factor, 3);
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let config = SearchConfig::from_toml_str("oversample_factor = 5\n").unwrap();
        assert_eq!(config.oversample_factor, 5);
        assert_eq!(config.default_top_k, 10);
        assert_eq!(config.default_max_results, 20);
    }

    #[test]
    fn zero_oversample_factor_is_rejected() {
        let err = SearchConfig::from_toml_str("oversample_factor = 0").unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.toml");
        std::fs::write(&path, "default_top_k = 7\nparallel_threshold = 1\n").unwrap();
        let config = SearchConfig::load(&path).unwrap();
        assert_eq!(config.default_top_k, 7);
        assert_eq!(config.parallel_threshold, 1);
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let err = SearchConfig::load("/nonexistent/search.toml").unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }
}
