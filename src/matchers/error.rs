// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the string matchers.

/// Errors raised while preparing a search.
///
/// Every variant is detected during preprocessing. Once a table or automaton
/// has been built, scanning a text cannot fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum SearchError {
    /// Pattern cannot be used, most commonly because it is empty
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Text is missing where a sequence is required
    #[error("Invalid text: {0}")]
    InvalidText(String),

    /// Pattern is longer than the configured limit
    #[error("Pattern of {length} symbols exceeds maximum allowed length of {max}")]
    PatternTooLarge {
        /// Length of the rejected pattern
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// Rolling hash base or modulus is unusable
    #[error("Invalid hash parameters: {0}")]
    InvalidHashParameters(String),
}

impl SearchError {
    pub(crate) fn empty_pattern() -> Self {
        Self::InvalidPattern("pattern cannot be empty".to_string())
    }
}

/// Result type for matcher operations
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SearchError::empty_pattern().to_string(),
            "Invalid pattern: pattern cannot be empty"
        );
        let err = SearchError::PatternTooLarge { length: 40, max: 32 };
        assert_eq!(
            err.to_string(),
            "Pattern of 40 symbols exceeds maximum allowed length of 32"
        );
    }
}
