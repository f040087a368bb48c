//! Search configuration module.
//!
//! This module defines the settings the search engine is built from: the
//! default algorithm, table sizes, pattern limits, the batch worker pool and
//! the rolling hash parameters.

use super::{ConfigResult, Validate};
use crate::engine::SearchAlgorithm;
use crate::error::config::ConfigError;
use crate::matchers::boyer_moore_matcher::{DEFAULT_ALPHABET_SIZE, MAX_PATTERN_LENGTH};
use crate::matchers::RollingHashParams;
use serde::{Deserialize, Serialize};

/// Search engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Algorithm used when a command does not name one
    pub default_algorithm: SearchAlgorithm,

    /// Number of buckets for the Boyer-Moore bad character table
    pub alphabet_size: usize,

    /// Longest pattern accepted, in symbols
    pub max_pattern_length: usize,

    /// Number of worker threads for batch scans
    pub worker_threads: usize,

    /// Rabin-Karp hash parameters
    pub rolling_hash: RollingHashParams,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_algorithm: SearchAlgorithm::default(),
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            max_pattern_length: MAX_PATTERN_LENGTH,
            worker_threads: num_cpus::get(),
            rolling_hash: RollingHashParams::default(),
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.alphabet_size == 0 {
            return Err(ConfigError::ValidationError(
                "alphabet_size must be greater than 0".to_string(),
            ));
        }

        if self.max_pattern_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_pattern_length must be greater than 0".to_string(),
            ));
        }

        if self.worker_threads == 0 {
            return Err(ConfigError::ValidationError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }

        self.rolling_hash
            .validate()
            .map_err(|e| ConfigError::ValueOutOfRange {
                key: "search.rolling_hash".to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}
